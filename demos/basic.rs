//! Basic obfuscation example
//!
//! Submits a small script to the recommended node, polls once for the
//! outcome and downloads the result. Reads the API key from the
//! `LPH_API_KEY` environment variable (a `.env` file works too).

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use luraph::Luraph;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("LPH_API_KEY")?;
    let api = Luraph::new(api_key);

    let stamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let file_name = format!("hello-{}.lua", stamp);
    println!("[*] file name: {}", file_name);

    let nodes = api.get_nodes().await?;
    let node_id = nodes
        .recommended_id
        .ok_or("no node is currently marked stable")?;
    println!("[*] recommended node: {}", node_id);
    println!("[*] cpu usage: {}", nodes.nodes[&node_id].cpu_usage);

    let job = api
        .create_new_job(
            &node_id,
            "print'Hello World!'",
            &file_name,
            &HashMap::new(),
            false,
            false,
        )
        .await?;
    println!("[*] job id: {}", job.job_id);

    let status = api.get_job_status(&job.job_id).await?;
    println!(
        "[*] job status: {}",
        if status.success { "success" } else { "error" }
    );

    if status.success {
        let result = api.download_result(&job.job_id).await?;
        println!("[*] result name: {}", result.file_name);
        println!(
            "[*] first line: {}",
            result.data.lines().next().unwrap_or("")
        );
    } else {
        eprintln!(
            "[*] obfuscation failed: {}",
            status.error.unwrap_or_default()
        );
    }

    Ok(())
}
