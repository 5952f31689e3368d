use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use timemachine_core::config::{ModelBackendConfig, Provider, RequestMode};
use timemachine_core::core::{GenerationOrchestrator, OrchestrationError, OrchestratorSettings};
use timemachine_core::llm::{BackendClient, BackendRegistry, LLMError};

/// Scripted reply for one model id
#[derive(Clone)]
enum Reply {
    Text(&'static str),
    Fail,
    Hang,
    Panic,
}

struct ScriptedClient {
    provider: Provider,
    replies: HashMap<&'static str, (Duration, Reply)>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    fn new(provider: Provider) -> Self {
        Self {
            provider,
            replies: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    fn reply(mut self, model_id: &'static str, delay_ms: u64, reply: Reply) -> Self {
        self.replies
            .insert(model_id, (Duration::from_millis(delay_ms), reply));
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackendClient for ScriptedClient {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn generate(
        &self,
        _prompt: &str,
        config: &ModelBackendConfig,
    ) -> Result<String, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, reply) = self
            .replies
            .get(config.model_id.as_str())
            .cloned()
            .unwrap_or((Duration::ZERO, Reply::Fail));

        tokio::time::sleep(delay).await;
        match reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Fail => Err(LLMError::Network("connection refused".to_string())),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok("too late.".to_string())
            }
            Reply::Panic => panic!("scripted panic"),
        }
    }
}

fn backend(year: i32, name: &str, provider: Provider, model_id: &str) -> ModelBackendConfig {
    ModelBackendConfig::new(year, name, provider, RequestMode::Chat, model_id)
}

fn lineup() -> Vec<ModelBackendConfig> {
    vec![
        backend(2018, "GPT-2", Provider::HuggingFace, "gpt-2"),
        backend(2020, "GPT-3", Provider::HuggingFace, "gpt-3"),
        backend(2023, "GPT-4", Provider::OpenRouter, "gpt-4"),
        backend(2025, "GPT-5", Provider::OpenRouter, "gpt-5"),
    ]
}

fn orchestrator(
    clients: Vec<Arc<ScriptedClient>>,
    timeout: Duration,
) -> GenerationOrchestrator {
    let mut registry = BackendRegistry::new();
    for client in clients {
        registry.register(client);
    }
    let settings = OrchestratorSettings {
        backend_timeout: timeout,
        ..OrchestratorSettings::default()
    };
    GenerationOrchestrator::new(Arc::new(registry), settings)
}

#[tokio::test]
async fn test_results_follow_configuration_order_not_completion_order() {
    let hf = Arc::new(
        ScriptedClient::new(Provider::HuggingFace)
            .reply("gpt-2", 120, Reply::Text("Slow and old. And"))
            .reply("gpt-3", 10, Reply::Text("Quick one!")),
    );
    let or = Arc::new(
        ScriptedClient::new(Provider::OpenRouter)
            .reply("gpt-4", 60, Reply::Text("Middle,"))
            .reply("gpt-5", 0, Reply::Text("Fastest \"answer.\" trailing")),
    );

    let results = orchestrator(vec![hf.clone(), or.clone()], Duration::from_secs(5))
        .orchestrate("Hello", &lineup())
        .await
        .unwrap();

    let years: Vec<i32> = results.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2018, 2020, 2023, 2025]);
    assert_eq!(results[0].output, "Slow and old.");
    assert_eq!(results[1].output, "Quick one!");
    assert_eq!(results[2].output, "Middle...");
    assert_eq!(results[3].output, "Fastest \"answer.\"");
    assert_eq!(hf.calls(), 2);
    assert_eq!(or.calls(), 2);
}

#[tokio::test]
async fn test_every_backend_failing_still_yields_full_set() {
    let hf = Arc::new(
        ScriptedClient::new(Provider::HuggingFace)
            .reply("gpt-2", 0, Reply::Fail)
            .reply("gpt-3", 0, Reply::Fail),
    );
    let or = Arc::new(ScriptedClient::new(Provider::OpenRouter));

    let results = orchestrator(vec![hf, or], Duration::from_secs(5))
        .orchestrate("Hello", &lineup())
        .await
        .unwrap();

    let outputs: Vec<&str> = results.iter().map(|r| r.output.as_str()).collect();
    assert_eq!(
        outputs,
        vec![
            "[GPT-2 response]",
            "[GPT-3 response]",
            "[GPT-4 response]",
            "[GPT-5 response]"
        ]
    );
    assert!(results.iter().all(|r| r.is_placeholder()));
}

#[tokio::test]
async fn test_slow_backend_times_out_without_delaying_others() {
    let hf = Arc::new(
        ScriptedClient::new(Provider::HuggingFace)
            .reply("gpt-2", 0, Reply::Hang)
            .reply("gpt-3", 0, Reply::Text("On time.")),
    );
    let or = Arc::new(
        ScriptedClient::new(Provider::OpenRouter)
            .reply("gpt-4", 0, Reply::Text("Also on time."))
            .reply("gpt-5", 0, Reply::Text("Same here.")),
    );

    let started = std::time::Instant::now();
    let results = orchestrator(vec![hf, or], Duration::from_millis(200))
        .orchestrate("Hello", &lineup())
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(results[0].output, "[GPT-2 response]");
    assert_eq!(results[1].output, "On time.");
    assert_eq!(results[2].output, "Also on time.");
    assert_eq!(results[3].output, "Same here.");
}

#[tokio::test]
async fn test_panicking_client_degrades_only_its_slot() {
    let hf = Arc::new(
        ScriptedClient::new(Provider::HuggingFace)
            .reply("gpt-2", 0, Reply::Panic)
            .reply("gpt-3", 0, Reply::Text("Fine.")),
    );
    let or = Arc::new(
        ScriptedClient::new(Provider::OpenRouter)
            .reply("gpt-4", 0, Reply::Text("Fine too."))
            .reply("gpt-5", 0, Reply::Text("Also fine.")),
    );

    let results = orchestrator(vec![hf, or], Duration::from_secs(5))
        .orchestrate("Hello", &lineup())
        .await
        .unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].output, "[GPT-2 response]");
    assert_eq!(results[1].output, "Fine.");
}

#[tokio::test]
async fn test_empty_prompt_makes_no_backend_calls() {
    let hf = Arc::new(ScriptedClient::new(Provider::HuggingFace));
    let or = Arc::new(ScriptedClient::new(Provider::OpenRouter));

    let err = orchestrator(vec![hf.clone(), or.clone()], Duration::from_secs(5))
        .orchestrate("", &lineup())
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestrationError::EmptyPrompt));
    assert_eq!(hf.calls(), 0);
    assert_eq!(or.calls(), 0);
}

#[tokio::test]
async fn test_no_backends_yields_no_results() {
    let hf = Arc::new(ScriptedClient::new(Provider::HuggingFace));

    let results = orchestrator(vec![hf.clone()], Duration::from_secs(1))
        .orchestrate("Hello", &[])
        .await
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(hf.calls(), 0);
}

#[tokio::test]
async fn test_empty_prompt_is_rejected_even_without_backends() {
    let err = orchestrator(vec![], Duration::from_secs(1))
        .orchestrate("  ", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestrationError::EmptyPrompt));
}

#[tokio::test]
async fn test_duplicate_years_are_rejected_before_dispatch() {
    let hf = Arc::new(ScriptedClient::new(Provider::HuggingFace));
    let mut backends = lineup();
    backends[1].year = 2018;

    let err = orchestrator(vec![hf.clone()], Duration::from_secs(5))
        .orchestrate("Hello", &backends)
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestrationError::InvalidConfiguration(_)));
    assert_eq!(hf.calls(), 0);
}

#[tokio::test]
async fn test_mixed_outcomes_scenario() {
    let hf = Arc::new(
        ScriptedClient::new(Provider::HuggingFace)
            .reply("gpt-2", 0, Reply::Text("The cat sat on the mat. Then it"))
            .reply("gpt-3", 0, Reply::Fail),
    );
    let or = Arc::new(
        ScriptedClient::new(Provider::OpenRouter)
            .reply("gpt-4", 0, Reply::Text("Cats are curious creatures!"))
            .reply("gpt-5", 0, Reply::Text("Cats, in general,")),
    );

    let results = orchestrator(vec![hf, or], Duration::from_secs(5))
        .orchestrate("Tell me about cats", &lineup())
        .await
        .unwrap();

    let outputs: Vec<&str> = results.iter().map(|r| r.output.as_str()).collect();
    assert_eq!(
        outputs,
        vec![
            "The cat sat on the mat.",
            "[GPT-3 response]",
            "Cats are curious creatures!",
            "Cats, in general..."
        ]
    );
    assert_eq!(results[2].model, "GPT-4");
    assert_eq!(results[2].model_id, "gpt-4");
}
