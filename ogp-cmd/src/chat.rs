//! `chat`: one round trip with the assistant.

use ogp_core::ApiClient;
use ogp_data::chat::Transcript;

pub async fn run_chat(client: &ApiClient, message: &str) -> anyhow::Result<()> {
    let mut transcript = Transcript::new();
    let Some(message) = transcript.submit(message) else {
        anyhow::bail!("message is empty");
    };
    transcript.settle(client.send_chat(&message).await);

    // Failures settle to the fallback text rather than an error
    if let Some(reply) = transcript.messages().last() {
        println!("{}", reply.text);
    }
    Ok(())
}
