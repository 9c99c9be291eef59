// src/config.rs

/// Configuración de la aplicación de escritorio/web.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Si es `false`, los errores de identidad se marcan pero no bloquean la entrada.
    pub strict_identity: bool,
    /// Directorio donde se guardan los cuestionarios (solo nativo).
    pub data_dir: std::path::PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strict_identity: true,
            data_dir: std::path::PathBuf::from("."),
        }
    }
}

/// Interpreta interruptores tipo `0`, `false`, `off`, `no`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let defaults = Self::default();
        let strict_identity = std::env::var("QUIZ_STUDIO_STRICT_IDENTITY")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.strict_identity);
        let data_dir = std::env::var("QUIZ_STUDIO_DATA_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(std::path::PathBuf::from)
            .unwrap_or(defaults.data_dir);
        Self {
            strict_identity,
            data_dir,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let strict_identity = strict_from_querystring()
            .or_else(|| option_env!("QUIZ_STUDIO_STRICT_IDENTITY").and_then(parse_flag))
            .unwrap_or(true);
        Self {
            strict_identity,
            ..Self::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn strict_from_querystring() -> Option<bool> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "strict_identity" {
            return parse_flag(value);
        }
    }
    None
}
