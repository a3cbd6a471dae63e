use graze::config::Config;
use graze::http::parser::parse_request;

fn main() -> anyhow::Result<()> {
    let cfg = Config::load();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(if cfg.trace_rules {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        })
        .init();

    let input = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: graze <request>"))?;

    match parse_request(input.as_bytes()) {
        Ok((request, consumed)) => {
            println!("Method  : {}", request.method);
            println!("URI     : {}", request.target);
            println!("Version : {}", request.version);
            for (name, value) in &request.headers {
                println!(" | {} => {}", name, value);
            }
            tracing::debug!("consumed {} of {} bytes", consumed, input.len());
        }
        Err(e) => {
            println!("Invalid request");
            tracing::warn!("parse failed: {}", e);
        }
    }

    Ok(())
}
