use clap::Parser;
use roman_api::core::converter::decode;
use roman_api::utils::logger;
use roman_api::RomanClient;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "roman")]
#[command(about = "Convert a whole number (1-3999) to a Roman numeral via roman-api")]
struct Args {
    /// Number to convert
    value: String,

    #[arg(long, default_value = "http://localhost:8080")]
    server: String,

    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let client = RomanClient::with_timeout(&args.server, Duration::from_millis(args.timeout_ms))?;

    match client.convert(&args.value).await {
        Ok(numeral) => {
            tracing::debug!("{} decodes back to {:?}", numeral, decode(numeral.as_str()));
            println!("Roman numeral: {}", numeral);
            Ok(())
        }
        // 輸入錯誤與系統錯誤分開顯示
        Err(e) if e.is_input_error() => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("❌ System Error: {}", e);
            std::process::exit(1);
        }
    }
}
