use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct RenderEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> RenderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// 抓取、渲染、寫出；抓取失敗時直接中止，不寫任何檔案
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting project render...");
        self.monitor.log_phase("Start");

        let repositories = match self.pipeline.extract().await {
            Ok(repositories) => repositories,
            Err(e) => {
                tracing::error!("Error fetching repos: {}", e);
                return Err(e);
            }
        };
        self.monitor.log_phase("Fetch");

        let result = self.pipeline.transform(repositories).await?;
        self.monitor.log_phase("Render");

        let output_path = self.pipeline.load(result).await?;
        self.monitor.log_phase("Save");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
