use quiz_studio::QuizApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quiz Studio")
            .with_inner_size([820.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Quiz Studio",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("sin documento: la app solo arranca dentro de una página");
            return;
        };
        let canvas = match document
            .get_element_by_id("quiz_studio_canvas")
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("no se encontró el canvas 'quiz_studio_canvas'");
                return;
            }
        };

        let start = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(QuizApp::new(cc)))),
            )
            .await;
        if let Err(err) = start {
            log::error!("no se pudo arrancar eframe: {err:?}");
        }
    });
}
