// src/server.rs
//
// Servidor de ficheros estáticos para la versión web.

use std::collections::HashMap;
use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

const MAX_HEADER_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub root: PathBuf,
    /// Documento servido para `/`, relativo a `root`.
    pub index: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            root: PathBuf::from("."),
            index: "app/index.html".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        Self {
            port: non_blank("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            root: non_blank("QUIZ_STUDIO_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.root),
            index: non_blank("QUIZ_STUDIO_INDEX").unwrap_or(defaults.index),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("could not read request: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed request: {0}")]
    Malformed(&'static str),
}

pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(|s| s.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    fn status_text(&self) -> &'static str {
        match self.status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "OK",
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!("HTTP/1.1 {} {}\r\n", self.status, self.status_text());
        if let Some(content_type) = self.content_type {
            head.push_str(&format!("Content-Type: {content_type}\r\n"));
        }
        head.push_str(&format!(
            "Content-Length: {}\r\nConnection: close\r\n\r\n",
            self.body.len()
        ));
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

/// Tipo de contenido por extensión; lo desconocido se sirve como HTML.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") => "image/jpg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("txt") => "text/plain",
        Some("wasm") => "application/wasm",
        _ => "text/html",
    }
}

/// Ruta en disco para una URL; `None` si intenta salir de `root`.
pub fn resolve_path(config: &ServerConfig, url: &str) -> Option<PathBuf> {
    let path = url.split(['?', '#']).next().unwrap_or("/");
    let relative = if path == "/" || path.is_empty() {
        config.index.as_str()
    } else {
        path.trim_start_matches('/')
    };

    let relative = Path::new(relative);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }
    Some(config.root.join(relative))
}

fn not_found() -> HttpResponse {
    HttpResponse {
        status: 404,
        content_type: Some("text/html"),
        body: b"<h1>404 Not Found</h1>".to_vec(),
    }
}

pub fn respond(config: &ServerConfig, url: &str) -> HttpResponse {
    let Some(file_path) = resolve_path(config, url) else {
        log::warn!("ruta rechazada: {url}");
        return not_found();
    };

    match std::fs::read(&file_path) {
        Ok(body) => HttpResponse {
            status: 200,
            content_type: Some(content_type_for(&file_path)),
            body,
        },
        Err(err) if err.kind() == ErrorKind::NotFound => not_found(),
        Err(err) => {
            log::error!("error leyendo {}: {err}", file_path.display());
            HttpResponse {
                status: 500,
                content_type: None,
                body: format!("Sorry, there was an error: {:?} ..\n", err.kind()).into_bytes(),
            }
        }
    }
}

pub fn read_http_request(stream: &mut impl Read) -> Result<HttpRequest, ServeError> {
    let mut buffer = Vec::with_capacity(4096);
    let mut temp = [0_u8; 1024];

    loop {
        let n = stream.read(&mut temp)?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&temp[..n]);

        if find_header_end(&buffer).is_some() {
            break;
        }
        if buffer.len() > MAX_HEADER_BYTES {
            return Err(ServeError::Malformed("headers too large"));
        }
    }

    let header_end = find_header_end(&buffer).ok_or(ServeError::Malformed("incomplete headers"))?;
    let header_text = std::str::from_utf8(&buffer[..header_end])
        .map_err(|_| ServeError::Malformed("headers are not UTF-8"))?;

    let mut lines = header_text.split("\r\n");
    let request_line = lines.next().ok_or(ServeError::Malformed("missing request line"))?;
    let mut parts = request_line.split_whitespace();
    let method = parts
        .next()
        .ok_or(ServeError::Malformed("missing method"))?
        .to_string();
    let path = parts
        .next()
        .ok_or(ServeError::Malformed("missing path"))?
        .to_string();

    let mut headers = HashMap::new();
    for line in lines.filter(|l| !l.is_empty()) {
        let (key, value) = line
            .split_once(':')
            .ok_or(ServeError::Malformed("header without ':'"))?;
        headers.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    Ok(HttpRequest {
        method,
        path,
        headers,
    })
}

fn find_header_end(bytes: &[u8]) -> Option<usize> {
    bytes.windows(4).position(|w| w == b"\r\n\r\n")
}

pub fn handle_connection(config: &ServerConfig, mut stream: TcpStream) -> Result<(), ServeError> {
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;

    let response = match read_http_request(&mut stream) {
        Ok(request) => {
            let response = respond(config, &request.path);
            log::info!(
                "{} {} -> {} ({})",
                request.method,
                request.path,
                response.status,
                request.header("user-agent").unwrap_or("-")
            );
            response
        }
        Err(err) => {
            log::warn!("petición inválida: {err}");
            HttpResponse {
                status: 400,
                content_type: Some("text/plain; charset=utf-8"),
                body: format!("bad request: {err}").into_bytes(),
            }
        }
    };

    stream.write_all(&response.to_bytes())?;
    stream.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quiz_studio_{name}_{}", std::process::id()));
        std::fs::create_dir_all(dir.join("app")).unwrap();
        dir
    }

    #[test]
    fn known_extensions_map_to_content_types() {
        assert_eq!(content_type_for(Path::new("a/app.js")), "application/javascript");
        assert_eq!(content_type_for(Path::new("style.css")), "text/css");
        assert_eq!(content_type_for(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(content_type_for(Path::new("photo.jpg")), "image/jpg");
        assert_eq!(content_type_for(Path::new("notes.txt")), "text/plain");
        assert_eq!(content_type_for(Path::new("quiz_studio_bg.wasm")), "application/wasm");
    }

    #[test]
    fn unknown_extension_is_html() {
        assert_eq!(content_type_for(Path::new("archive.tar.zst")), "text/html");
        assert_eq!(content_type_for(Path::new("README")), "text/html");
    }

    #[test]
    fn root_path_serves_index_document() {
        let config = ServerConfig::default();
        assert_eq!(
            resolve_path(&config, "/"),
            Some(PathBuf::from("./app/index.html"))
        );
        assert_eq!(
            resolve_path(&config, "/dist/app.js?v=3"),
            Some(PathBuf::from("./dist/app.js"))
        );
    }

    #[test]
    fn parent_segments_are_rejected() {
        let config = ServerConfig::default();
        assert_eq!(resolve_path(&config, "/../secret.txt"), None);
        assert_eq!(resolve_path(&config, "/app/../../etc/passwd"), None);
    }

    #[test]
    fn serves_existing_file_and_404s_missing_one() {
        let root = temp_root("serve");
        std::fs::write(root.join("app/index.html"), "<p>quiz</p>").unwrap();
        let config = ServerConfig {
            root: root.clone(),
            ..ServerConfig::default()
        };

        let ok = respond(&config, "/");
        assert_eq!(ok.status, 200);
        assert_eq!(ok.content_type, Some("text/html"));
        assert_eq!(ok.body, b"<p>quiz</p>");

        let missing = respond(&config, "/nope.css");
        assert_eq!(missing.status, 404);
        assert_eq!(missing.body, b"<h1>404 Not Found</h1>");

        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn reading_a_directory_is_a_server_error() {
        let root = temp_root("dir");
        let config = ServerConfig {
            root: root.clone(),
            ..ServerConfig::default()
        };
        let response = respond(&config, "/app");
        assert_eq!(response.status, 500);
        let body = String::from_utf8(response.body).unwrap();
        assert!(body.starts_with("Sorry, there was an error: "));
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn parses_request_line_and_headers() {
        let raw = b"GET /app/app.js HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test\r\n\r\n";
        let request = read_http_request(&mut &raw[..]).unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/app/app.js");
        assert_eq!(request.header("USER-AGENT"), Some("test"));
    }

    #[test]
    fn truncated_request_is_malformed() {
        let raw = b"GET / HTTP/1.1\r\nHost: x";
        assert!(matches!(
            read_http_request(&mut &raw[..]),
            Err(ServeError::Malformed(_))
        ));
    }

    #[test]
    fn config_reads_port_and_root() {
        let config = ServerConfig::from_lookup(|key| match key {
            "PORT" => Some("8080".into()),
            "QUIZ_STUDIO_ROOT" => Some("dist".into()),
            _ => None,
        });
        assert_eq!(config.port, 8080);
        assert_eq!(config.root, PathBuf::from("dist"));
        assert_eq!(config.index, "app/index.html");
        assert_eq!(ServerConfig::from_lookup(|_| None), ServerConfig::default());
    }

    #[test]
    fn response_bytes_have_status_line_and_length() {
        let response = HttpResponse {
            status: 404,
            content_type: Some("text/html"),
            body: b"x".to_vec(),
        };
        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains("Content-Length: 1\r\n"));
        assert!(text.ends_with("\r\n\r\nx"));
    }
}
