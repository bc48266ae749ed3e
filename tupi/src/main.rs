#![forbid(unsafe_code)]

mod helpers;
mod models;

#[macro_use]
extern crate lazy_static;

use crate::helpers::{collaborators::Offline, pipeline};
use crate::models::activity::{Activity, Context, Outcome};
use std::{path::Path, sync::Arc};
use tonic::{transport::Server, Request, Response, Status};
use tracing::{error, info, warn, Level};
use tracing_subscriber::fmt;
use tupi::{
    tupi_server::{Tupi, TupiServer},
    {
        AboutReply, Analysis, AnalyzeRequest, FrequencyReply,
        NormalizeReply, SentimentReply, TagReply, TextRequest, TokenLemma,
        TranslateReply, TranslateRequest, Void,
    },
};
use tupi_error::{Error, ErrorType, PipelineError};
use tupi_tokenizer::stopwords;

pub mod tupi {
    tonic::include_proto!("tupi");
}

struct SuperTupi {
    context: Context,
}

/// Non-empty text is a caller-level precondition: the pipeline itself
/// degrades to empty outputs, the rpc boundary rejects instead.
fn non_empty(text: String) -> Result<String, Status> {
    if text.trim().is_empty() {
        let error = Error::new(
            ErrorType::Pipeline(PipelineError::EmptyInput),
            None,
            None,
        );
        Err(Status::invalid_argument(error.to_string()))
    } else {
        Ok(text)
    }
}

#[tonic::async_trait]
impl Tupi for SuperTupi {
    async fn normalize(
        &self,
        request: Request<TextRequest>,
    ) -> Result<Response<NormalizeReply>, Status> {
        let text = non_empty(request.into_inner().text)?;

        Ok(Response::new(NormalizeReply {
            text: tupi_normalizer::normalize(&text, &self.context.options),
        }))
    }

    async fn analyze(
        &self,
        request: Request<AnalyzeRequest>,
    ) -> Result<Response<Analysis>, Status> {
        let data = request.into_inner();
        let text = non_empty(data.text)?;
        let summary_length = if data.summary_length == 0 {
            self.context.summary_length
        } else {
            data.summary_length as usize
        };

        match (Activity::TextAnalysis {
            text,
            summary_length,
        })
        .run(&self.context)
        {
            Ok(Outcome::Analysis(analysis)) => {
                Ok(Response::new(Analysis {
                    tokens: analysis.tokens,
                    frequencies: analysis
                        .frequencies
                        .into_iter()
                        .map(|(word, count)| (word, count as u64))
                        .collect(),
                    summary: analysis.summary,
                }))
            },
            Ok(outcome) => {
                error!("Text analysis produced {:?}", outcome);
                Err(Status::internal("unexpected outcome"))
            },
            Err(err) => {
                error!("Failed to analyze text: {}", err);
                Err(Status::internal("failed to analyze text"))
            },
        }
    }

    async fn wordcloud(
        &self,
        request: Request<TextRequest>,
    ) -> Result<Response<FrequencyReply>, Status> {
        let text = non_empty(request.into_inner().text)?;
        let normalized =
            tupi_normalizer::normalize(&text, &self.context.options);

        Ok(Response::new(FrequencyReply {
            frequencies: pipeline::wordcloud_input(
                &normalized,
                &self.context.exclude,
                self.context.stopwords,
            )
            .into_iter()
            .map(|(word, count)| (word, count as u64))
            .collect(),
        }))
    }

    async fn tag(
        &self,
        request: Request<TextRequest>,
    ) -> Result<Response<TagReply>, Status> {
        let text = non_empty(request.into_inner().text)?;
        let normalized =
            tupi_normalizer::normalize(&text, &self.context.options);

        // secondary strip before the token stream reaches the model.
        let tokens = pipeline::analyze(
            &normalized,
            0,
            &self.context.exclude,
            self.context.stopwords,
        )
        .tokens;
        let cleaned = stopwords::remove_words_from_sentence(
            tokens.join(" "),
            self.context.stopwords,
        );

        match self.context.tagger.tag(&cleaned) {
            Ok(pairs) => Ok(Response::new(TagReply {
                pairs: pairs
                    .into_iter()
                    .map(|(token, lemma)| TokenLemma { token, lemma })
                    .collect(),
            })),
            Err(err) => {
                warn!("Tagging failed: {}", err);
                Err(Status::unavailable("tagging model unavailable"))
            },
        }
    }

    async fn translate(
        &self,
        request: Request<TranslateRequest>,
    ) -> Result<Response<TranslateReply>, Status> {
        let data = request.into_inner();
        let text = non_empty(data.text)?;

        match (Activity::Translation {
            text,
            target: data.target,
        })
        .run(&self.context)
        {
            Ok(Outcome::Translation(text)) => {
                Ok(Response::new(TranslateReply { text }))
            },
            Ok(outcome) => {
                error!("Translation produced {:?}", outcome);
                Err(Status::internal("unexpected outcome"))
            },
            Err(err) => {
                warn!("Translation failed: {}", err);
                Err(Status::unavailable("translation service unavailable"))
            },
        }
    }

    async fn sentiment(
        &self,
        request: Request<TextRequest>,
    ) -> Result<Response<SentimentReply>, Status> {
        let text = non_empty(request.into_inner().text)?;

        match (Activity::SentimentAnalysis { text }).run(&self.context) {
            Ok(Outcome::Sentiment {
                polarity,
                subjectivity,
            }) => Ok(Response::new(SentimentReply {
                polarity,
                subjectivity,
            })),
            Ok(outcome) => {
                error!("Sentiment analysis produced {:?}", outcome);
                Err(Status::internal("unexpected outcome"))
            },
            Err(err) => {
                warn!("Sentiment analysis failed: {}", err);
                Err(Status::unavailable("sentiment scorer unavailable"))
            },
        }
    }

    async fn about(
        &self,
        _: Request<Void>,
    ) -> Result<Response<AboutReply>, Status> {
        match Activity::About.run(&self.context) {
            Ok(Outcome::About(text)) => Ok(Response::new(AboutReply {
                text: text.to_string(),
            })),
            _ => Err(Status::internal("unexpected outcome")),
        }
    }
}

#[tokio::main]
async fn main() {
    #[cfg(not(debug_assertions))]
    fmt()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_max_level(Level::INFO)
        .init();

    #[cfg(debug_assertions)]
    fmt()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_max_level(Level::TRACE)
        .init();

    let config = match helpers::config::read() {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load configuration: {}", err);
            std::process::exit(1);
        },
    };

    // Load the process-wide stopword set.
    let stopword_file = config
        .service
        .stopwords
        .clone()
        .unwrap_or_else(|| "./stopwords".to_string());
    stopwords::init(Path::new(&stopword_file).to_path_buf());
    info!(
        "Loaded {} stopwords for language {:?}.",
        stopwords::get().len(),
        config.service.lang.as_deref().unwrap_or("pt")
    );

    let options = match config.service.normalizer.to_options() {
        Ok(options) => options,
        Err(err) => {
            error!("Invalid normalizer configuration: {}", err);
            std::process::exit(1);
        },
    };

    warn!(
        "No external collaborators configured: translation, sentiment and \
         tagging answer unavailable."
    );

    let context = Context {
        options,
        summary_length: config.service.summary_length.unwrap_or(3) as usize,
        exclude: config.service.exclude.clone(),
        stopwords: stopwords::get(),
        translator: Arc::new(Offline),
        sentiment: Arc::new(Offline),
        tagger: Arc::new(Offline),
    };

    ctrlc::set_handler(|| {
        info!("Shutting down.");
        std::process::exit(0);
    })
    .expect("Failed to set Ctrl+C handler");

    let addr = format!("0.0.0.0:{}", config.port.unwrap_or(50051))
        .parse()
        .unwrap();

    info!("Server started on {}", addr);

    Server::builder()
        .add_service(TupiServer::new(SuperTupi { context }))
        .serve(addr)
        .await
        .unwrap();
}
