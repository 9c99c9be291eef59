use quiz_studio::server::{ServerConfig, handle_connection};
use std::net::TcpListener;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let listener = TcpListener::bind(config.bind_addr())?;
    log::info!(
        "Server running at http://localhost:{}/ (root: {})",
        config.port,
        config.root.display()
    );

    // una conexión cada vez, en el hilo que acepta
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(err) = handle_connection(&config, stream) {
                    log::warn!("conexión fallida: {err}");
                }
            }
            Err(err) => log::warn!("accept fallido: {err}"),
        }
    }
    Ok(())
}

// el servidor solo tiene sentido en nativo
#[cfg(target_arch = "wasm32")]
fn main() {}
