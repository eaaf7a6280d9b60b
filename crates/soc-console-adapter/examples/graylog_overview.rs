/*
[INPUT]:  SOC_CONSOLE_BASE_URL and SOC_CONSOLE_ACCESS_TOKEN environment variables
[OUTPUT]: Summary of log-aggregation inputs, streams and throughput
[POS]:    Examples - read-only log-aggregation queries
[UPDATE]: When adding new log-aggregation endpoints
*/

use soc_console_adapter::*;

/// Example: summarize the log-aggregation backend through the SOC console
#[tokio::main]
async fn main() {
    println!("=== SOC Console Log Aggregation Overview ===\n");

    let base_url =
        std::env::var("SOC_CONSOLE_BASE_URL").unwrap_or_else(|_| ClientConfig::default().base_url);
    let mut client = match ConsoleClient::with_base_url(&base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    if let Ok(token) = std::env::var("SOC_CONSOLE_ACCESS_TOKEN") {
        client.set_credentials(Credentials::bearer(token));
    }
    println!("✓ HTTP client created for {}\n", base_url);

    println!("Querying throughput metrics...");
    match client.get_metrics().await {
        Ok(response) => {
            for metric in response.data.metrics {
                println!("  {} = {}", metric.metric, metric.value);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying running inputs...");
    match client.get_inputs_running().await {
        Ok(response) => {
            for input in response.data.inputs {
                let state = input.state.unwrap_or(InputState::Unknown);
                println!("  {} {:?}", input.id, state);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying streams...");
    match client.get_streams().await {
        Ok(response) => {
            for stream in response.data.streams {
                let paused = stream.disabled.unwrap_or(false);
                println!(
                    "  {} {} {}",
                    stream.id,
                    stream.title.as_deref().unwrap_or("<untitled>"),
                    if paused { "(paused)" } else { "" }
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nFetching first page of messages...");
    match client.get_messages(None).await {
        Ok(response) => println!("✓ {} messages in total", response.data.total_messages),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Overview complete");
}
