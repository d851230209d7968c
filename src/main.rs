use anyhow::Context;
use chrono::Local;
use log::info;
use shipper::api::{AsAny, Logistic};
use shipper::{Shipper, ShipperApi};
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    let mut log_builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    log_builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %:z"),
                record.level(),
                record.args()
            )
        })
        .init();

    // 命令行参数: [资源名称]，默认查询物流商列表
    let resource = std::env::args().nth(1).unwrap_or_else(|| "logistic".to_string());

    let shipper = Shipper::make(None, None).context("Failed to load Shipper configuration")?;
    info!(
        "Using {} environment at {}",
        if shipper.is_sandbox() { "sandbox" } else { "production" },
        shipper.api_url()
    );

    let api = shipper.api(&resource)?;
    info!("Resolved handler {}", api.name());

    if api.name() == "logistic" {
        let logistic = api
            .into_any()
            .downcast::<Logistic>()
            .map_err(|_| anyhow::anyhow!("Unexpected handler type for {}", resource))?;
        let response = logistic.list().await?;
        println!("{}", serde_json::to_string_pretty(&response.data)?);
    } else {
        println!("Available handlers: {}", shipper.registry().names().join(", "));
    }

    Ok(())
}
