use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use loja_painel::backend::{self, StoreService};
use loja_painel::forms::{FieldSpec, FormSpec};
use loja_painel::ui::html_view::{ids, HtmlView, PageSnapshot};
use loja_painel::ui::render::EMPTY_RESULTS_MESSAGE;
use loja_painel::{ClientConfig, Controller, Event, Outcome};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn panel(base_url: &str) -> (Arc<HtmlView>, Controller) {
    let mut config = ClientConfig::default();
    config.api.base_url = base_url.to_string();
    let view = Arc::new(HtmlView::new());
    let controller = Controller::new(&config, view.clone()).unwrap();
    (view, controller)
}

fn submit(form_id: &str, pairs: &[(&str, &str)]) -> Event {
    Event::Submit {
        form_id: form_id.to_string(),
        entries: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

fn recomendacoes(cpf: &str) -> Event {
    Event::RequestRecommendations {
        cpf: cpf.to_string(),
    }
}

fn message(outcome: &Outcome) -> (&str, bool) {
    let notification = outcome.notification().expect("expected a notification");
    (notification.message.as_str(), notification.is_error())
}

fn assert_idle(page: &PageSnapshot) {
    assert_eq!(page.loader_display, "none");
}

fn ana() -> Event {
    submit(
        ids::FORM_CRIAR_CLIENTE,
        &[
            ("cpf", "111"),
            ("rg", ""),
            ("nome", "Ana"),
            ("telefone", "11999990000"),
            ("email", "ana@loja.com"),
            ("endereco", ""),
            ("dt_nasc", ""),
        ],
    )
}

#[tokio::test]
async fn test_success_shows_server_message_and_resets_form() {
    let base_url = serve(backend::router(StoreService::new())).await;
    let (view, controller) = panel(&base_url);

    let outcome = controller.dispatch(ana()).await;
    assert_eq!(message(&outcome), ("Cliente 'Ana' criado com sucesso!", false));

    let page = view.snapshot();
    assert_eq!(page.notification_text, "Cliente 'Ana' criado com sucesso!");
    assert!(page.notification_class.contains("bg-green-500"));
    assert!(!page.notification_hidden);
    assert_eq!(page.reset_forms, vec![ids::FORM_CRIAR_CLIENTE.to_string()]);
    assert_idle(&page);
}

#[tokio::test]
async fn test_success_without_message_uses_default() {
    let app = Router::new().route(
        "/amizades",
        post(|| async { (StatusCode::CREATED, Json(json!({}))) }),
    );
    let (view, controller) = panel(&serve(app).await);

    let outcome = controller
        .dispatch(submit(
            ids::FORM_CRIAR_AMIZADE,
            &[("cpf_cliente_1", "1"), ("cpf_cliente_2", "2")],
        ))
        .await;
    assert_eq!(message(&outcome), ("Amizade criada com sucesso!", false));
    assert_eq!(view.snapshot().reset_forms, vec![ids::FORM_CRIAR_AMIZADE.to_string()]);
    assert_idle(&view.snapshot());
}

#[tokio::test]
async fn test_empty_success_body_is_an_error() {
    let app = Router::new()
        .route("/compras", post(|| async { StatusCode::NO_CONTENT }))
        .route("/amizades", post(|| async { StatusCode::OK }));
    let (view, controller) = panel(&serve(app).await);

    let outcome = controller
        .dispatch(submit(
            ids::FORM_REGISTAR_COMPRA,
            &[("cpf_cliente", "1"), ("idprod", "2"), ("quantidade", "1")],
        ))
        .await;
    assert_eq!(message(&outcome), ("Ocorreu um erro.", true));

    let outcome = controller
        .dispatch(submit(
            ids::FORM_CRIAR_AMIZADE,
            &[("cpf_cliente_1", "1"), ("cpf_cliente_2", "2")],
        ))
        .await;
    assert_eq!(message(&outcome), ("Ocorreu um erro.", true));

    let page = view.snapshot();
    assert!(page.notification_class.contains("bg-red-500"));
    assert!(page.reset_forms.is_empty());
    assert_idle(&page);
}

#[tokio::test]
async fn test_error_detail_is_shown() {
    let base_url = serve(backend::router(StoreService::new())).await;
    let (view, controller) = panel(&base_url);

    let outcome = controller
        .dispatch(submit(
            ids::FORM_REGISTAR_COMPRA,
            &[("cpf_cliente", "999"), ("idprod", "1"), ("quantidade", "1")],
        ))
        .await;
    assert_eq!(message(&outcome), ("Cliente com CPF 999 não encontrado.", true));

    let page = view.snapshot();
    assert!(page.notification_class.contains("bg-red-500"));
    assert!(page.reset_forms.is_empty());
    assert_idle(&page);
}

#[tokio::test]
async fn test_validation_detail_list_is_shown() {
    let base_url = serve(backend::router(StoreService::new())).await;
    let (_view, controller) = panel(&base_url);

    let outcome = controller
        .dispatch(submit(
            ids::FORM_CRIAR_CLIENTE,
            &[("cpf", "1"), ("nome", "Ana"), ("telefone", "1"), ("email", "sem-arroba")],
        ))
        .await;
    assert_eq!(message(&outcome), ("value is not a valid email address", true));
}

#[tokio::test]
async fn test_error_without_detail_uses_fallback() {
    let app = Router::new()
        .route(
            "/produtos",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
        )
        .route(
            "/amizades",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"erro": "x"}))) }),
        );
    let (view, controller) = panel(&serve(app).await);

    let outcome = controller
        .dispatch(submit(
            ids::FORM_CRIAR_PRODUTO,
            &[("idprod", "1"), ("produto", "Café"), ("quantidade", "1"), ("preco", "2")],
        ))
        .await;
    assert_eq!(message(&outcome), ("Ocorreu um erro.", true));

    let outcome = controller
        .dispatch(submit(
            ids::FORM_CRIAR_AMIZADE,
            &[("cpf_cliente_1", "1"), ("cpf_cliente_2", "2")],
        ))
        .await;
    assert_eq!(message(&outcome), ("Ocorreu um erro.", true));
    assert_idle(&view.snapshot());
}

#[tokio::test]
async fn test_network_failure_uses_fallback() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let (view, controller) = panel(&format!("http://{}", addr));

    let outcome = controller.dispatch(ana()).await;
    assert_eq!(message(&outcome), ("Ocorreu um erro.", true));

    let outcome = controller.dispatch(recomendacoes("111")).await;
    assert_eq!(message(&outcome), ("Erro ao buscar recomendações.", true));
    assert_idle(&view.snapshot());
}

#[tokio::test]
async fn test_numeric_fields_in_payload() {
    let received: Arc<Mutex<Vec<Value>>> = Arc::default();
    let app = Router::new()
        .route(
            "/estoque",
            post(
                |State(received): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                    received.lock().unwrap().push(body);
                    (StatusCode::CREATED, Json(json!({"mensagem": "ok"})))
                },
            ),
        )
        .with_state(received.clone());
    let (_view, mut controller) = panel(&serve(app).await);
    controller.bind(
        FormSpec::new("form-ajuste-estoque", "/estoque", "Estoque ajustado.")
            .field(FieldSpec::number("idprod").required())
            .field(FieldSpec::number("quantidade"))
            .field(FieldSpec::number("preco"))
            .field(FieldSpec::text("obs")),
    );

    let outcome = controller
        .dispatch(submit(
            "form-ajuste-estoque",
            &[("idprod", "10"), ("quantidade", ""), ("preco", "9.5"), ("obs", "")],
        ))
        .await;
    assert_eq!(message(&outcome), ("ok", false));

    let bodies = received.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0], json!({"idprod": 10, "preco": 9.5, "obs": ""}));
    assert!(bodies[0]["idprod"].is_number());
    assert!(bodies[0].get("quantidade").is_none());
}

#[tokio::test]
async fn test_missing_required_field_sends_nothing() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route(
            "/produtos",
            post(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                StatusCode::CREATED
            }),
        )
        .with_state(hits.clone());
    let (view, controller) = panel(&serve(app).await);

    let outcome = controller
        .dispatch(submit(
            ids::FORM_CRIAR_PRODUTO,
            &[("idprod", "1"), ("produto", ""), ("quantidade", "1"), ("preco", "2")],
        ))
        .await;
    assert_eq!(message(&outcome), ("O campo 'produto' é obrigatório.", true));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_idle(&view.snapshot());
}

#[tokio::test]
async fn test_unknown_form_is_ignored() {
    let (view, controller) = panel("http://127.0.0.1:9");
    let outcome = controller.dispatch(submit("form-inexistente", &[("a", "1")])).await;
    assert_eq!(outcome, Outcome::Ignored);
    assert!(view.snapshot().notification_hidden);
}

#[tokio::test]
async fn test_empty_recommendations_show_placeholder_only() {
    let base_url = serve(backend::router(StoreService::new())).await;
    let (view, controller) = panel(&base_url);

    let outcome = controller.dispatch(recomendacoes("111")).await;
    assert_eq!(outcome, Outcome::Rendered { items: 0 });

    let page = view.snapshot();
    assert!(page.results_html.contains(EMPTY_RESULTS_MESSAGE));
    assert_eq!(page.results_html.matches("<div").count(), 0);
    assert_idle(&page);
}

#[tokio::test]
async fn test_recommendation_card() {
    let app = Router::new().route(
        "/recomendacoes/:cpf",
        get(|| async { Json(json!([{"produto": "X", "preco": 9.5, "quantidade": 3}])) }),
    );
    let (view, controller) = panel(&serve(app).await);

    view.type_into(ids::CPF_RECOMENDACAO_INPUT, "123");
    let event = view.click(ids::BTN_GET_RECOMENDACOES).unwrap();
    let outcome = controller.dispatch(event).await;
    assert_eq!(outcome, Outcome::Rendered { items: 1 });

    let results = view.element(ids::RECOMENDACOES_RESULTS).unwrap();
    assert_eq!(results.matches("<h4").count(), 1);
    assert!(results.contains("R$ 9.50"));
    assert!(results.contains("Em Estoque: 3"));
    assert_eq!(view.element(ids::LOADER).as_deref(), Some("none"));
}

fn failing_lookup(status: StatusCode, body: &'static str) -> Response {
    (status, [("content-type", "application/json")], body).into_response()
}

#[tokio::test]
async fn test_recommendation_errors_clear_previous_results() {
    let app = Router::new()
        .route(
            "/recomendacoes/ok",
            get(|| async { Json(json!([{"produto": "X", "preco": 1, "quantidade": 1}])) }),
        )
        .route(
            "/recomendacoes/sumido",
            get(|| async { failing_lookup(StatusCode::NOT_FOUND, r#"{"detail": "Cliente não encontrado."}"#) }),
        )
        .route(
            "/recomendacoes/quebrado",
            get(|| async { failing_lookup(StatusCode::OK, "isto não é json") }),
        )
        .route(
            "/recomendacoes/falha",
            get(|| async { failing_lookup(StatusCode::INTERNAL_SERVER_ERROR, "{}") }),
        );
    let (view, controller) = panel(&serve(app).await);

    controller.dispatch(recomendacoes("ok")).await;
    assert!(!view.snapshot().results_html.is_empty());

    let outcome = controller.dispatch(recomendacoes("sumido")).await;
    assert_eq!(message(&outcome), ("Cliente não encontrado.", true));
    assert!(view.snapshot().results_html.is_empty());

    let outcome = controller.dispatch(recomendacoes("quebrado")).await;
    assert_eq!(message(&outcome), ("Erro ao buscar recomendações.", true));

    let outcome = controller.dispatch(recomendacoes("falha")).await;
    assert_eq!(message(&outcome), ("Erro ao buscar recomendações.", true));
    assert_idle(&view.snapshot());
}

#[tokio::test]
async fn test_empty_recommendation_body_is_an_error() {
    let app = Router::new().route("/recomendacoes/:cpf", get(|| async { StatusCode::OK }));
    let (view, controller) = panel(&serve(app).await);

    let outcome = controller.dispatch(recomendacoes("123")).await;
    assert_eq!(message(&outcome), ("Erro ao buscar recomendações.", true));

    let page = view.snapshot();
    assert!(!page.results_html.contains(EMPTY_RESULTS_MESSAGE));
    assert!(page.results_html.is_empty());
    assert_idle(&page);
}

#[tokio::test]
async fn test_blank_cpf_sends_nothing() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route(
            "/recomendacoes/:cpf",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!([]))
            }),
        )
        .with_state(hits.clone());
    let (view, controller) = panel(&serve(app).await);

    let outcome = controller.dispatch(recomendacoes("   ")).await;
    assert_eq!(message(&outcome), ("Por favor, digite um CPF.", true));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_idle(&view.snapshot());
}

#[tokio::test]
async fn test_full_flow_through_event_queue() {
    let base_url = serve(backend::router(StoreService::new())).await;
    let (view, controller) = panel(&base_url);

    let (tx, rx) = mpsc::channel(16);
    let events = vec![
        ana(),
        submit(
            ids::FORM_CRIAR_CLIENTE,
            &[("cpf", "222"), ("nome", "Bruno"), ("telefone", "1"), ("email", "bruno@loja.com")],
        ),
        submit(
            ids::FORM_CRIAR_PRODUTO,
            &[("idprod", "7"), ("produto", "Café <especial>"), ("quantidade", "5"), ("preco", "32.9")],
        ),
        submit(
            ids::FORM_CRIAR_AMIZADE,
            &[("cpf_cliente_1", "111"), ("cpf_cliente_2", "222")],
        ),
        submit(
            ids::FORM_REGISTAR_COMPRA,
            &[("cpf_cliente", "222"), ("idprod", "7"), ("quantidade", "2")],
        ),
        recomendacoes("111"),
    ];
    for event in events {
        tx.send(event).await.unwrap();
    }
    drop(tx);

    let mut outcomes = Vec::new();
    let handled = controller.run_with(rx, |outcome| outcomes.push(outcome)).await;
    assert_eq!(handled, 6);
    assert_eq!(outcomes.len(), 6);
    assert_eq!(message(&outcomes[2]), ("Produto 'Café <especial>' adicionado com sucesso!", false));
    assert_eq!(message(&outcomes[3]), ("Amizade criada com sucesso entre Ana e Bruno!", false));
    assert_eq!(message(&outcomes[4]), ("Compra registada com sucesso!", false));
    assert_eq!(outcomes[5], Outcome::Rendered { items: 1 });

    let page = view.snapshot();
    assert!(page.results_html.contains("Café &lt;especial&gt;"));
    assert!(page.results_html.contains("R$ 32.90"));
    assert!(page.results_html.contains("Em Estoque: 3"));
    assert_eq!(page.reset_forms.len(), 5);
    assert_idle(&page);
    assert_eq!(controller.loader().in_flight(), 0);
}
