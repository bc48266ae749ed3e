use tupi::tupi_client::TupiClient;
use tupi::{AnalyzeRequest, TextRequest, TranslateRequest, Void};

pub mod tupi {
    tonic::include_proto!("tupi");
}

/// Demo client: pass a menu entry and a text, the way the web form's
/// selectbox drives the service.
///
/// ```sh
/// cargo run --example client -- "Text Analysis" "vc eh mt legal!"
/// ```
#[tokio::main]
async fn main() {
    let choice = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Text Analysis".to_string());
    let text = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "vc eh mt legal! gosto mt de vc".to_string());

    let mut client = TupiClient::connect("http://localhost:50051")
        .await
        .unwrap();

    match choice.as_str() {
        "Text Analysis" => {
            let normalized = client
                .normalize(TextRequest { text: text.clone() })
                .await
                .unwrap()
                .into_inner();
            println!("normalized: {}", normalized.text);

            let analysis = client
                .analyze(AnalyzeRequest {
                    text,
                    summary_length: 3,
                })
                .await
                .unwrap()
                .into_inner();
            println!("tokens: {:?}", analysis.tokens);
            println!("frequencies: {:?}", analysis.frequencies);
            println!("summary: {}", analysis.summary);
        },
        "Translation" => {
            match client
                .translate(TranslateRequest {
                    text,
                    target: "en".to_string(),
                })
                .await
            {
                Ok(reply) => println!("{}", reply.into_inner().text),
                Err(status) => eprintln!("translation: {}", status),
            }
        },
        "Sentiment Analysis" => {
            match client.sentiment(TextRequest { text }).await {
                Ok(reply) => {
                    let sentiment = reply.into_inner();
                    println!(
                        "polarity: {}, subjectivity: {}",
                        sentiment.polarity, sentiment.subjectivity
                    );
                },
                Err(status) => eprintln!("sentiment: {}", status),
            }
        },
        "About" => {
            let about =
                client.about(Void {}).await.unwrap().into_inner();
            println!("{}", about.text);
        },
        other => eprintln!("Unknown menu entry: {}", other),
    }
}
