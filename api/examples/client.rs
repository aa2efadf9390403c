use reqwest::Client;
use serde_json::json;
use tokio;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url = "http://127.0.0.1:3000";

    println!("Testing the document chat API");

    println!("\nSample questions:");
    let samples_response = client
        .get(&format!("{}/samples", base_url))
        .send()
        .await?;

    println!("Status: {}", samples_response.status());
    let samples_json: serde_json::Value = samples_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&samples_json)?);

    println!("\nPicking the first sample question:");
    let pick_response = client
        .post(&format!("{}/samples/pick", base_url))
        .header("Content-Type", "application/json")
        .json(&json!({ "index": 0 }))
        .send()
        .await?;

    println!("Status: {}", pick_response.status());

    println!("\nSending it:");
    let send_response = client
        .post(&format!("{}/send", base_url))
        .send()
        .await?;

    println!("Status: {}", send_response.status());
    let send_json: serde_json::Value = send_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&send_json)?);

    println!("\nConversation so far:");
    let conversation_response = client
        .get(&format!("{}/conversation", base_url))
        .send()
        .await?;

    let conversation_json: serde_json::Value = conversation_response.json().await?;
    println!(
        "Response: {}",
        serde_json::to_string_pretty(&conversation_json)?
    );

    println!("\nClient walkthrough completed");
    Ok(())
}
