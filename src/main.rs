use courier_service::api;
use courier_service::common::init;
use courier_service::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    api::serve(settings).await
}
