//! Option listing example
//!
//! Prints the option specs advertised by the recommended node,
//! including tier, type, choices and dependency constraints.

use luraph::Luraph;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let api = Luraph::new(std::env::var("LPH_API_KEY")?);

    let nodes = api.get_nodes().await?;
    let node_id = nodes
        .recommended_id
        .ok_or("no node is currently marked stable")?;
    println!("[*] recommended node: {}", node_id);

    let node = &nodes.nodes[&node_id];
    println!("[*] cpu usage: {}", node.cpu_usage);

    println!("[*] options:");
    for (option_id, info) in &node.options {
        println!("  * {} - {}:", option_id, info.name);
        println!("  |- desc: {}", info.description);
        println!("  |- type: {:?}", info.kind);
        println!("  |- tier: {:?}", info.tier);
        println!("  |- choices: [{}]", info.choices.join(", "));
        println!("  |- required: {}", info.required);
        if let Some(dependencies) = &info.dependencies {
            println!("  |- dependencies: {:?}", dependencies);
        }
    }

    Ok(())
}
