// src/store.rs

use crate::model::Quiz;
use std::collections::HashMap;

/// Clave fija bajo la que se guarda la lista de cuestionarios.
pub const STORAGE_KEY: &str = "userQuizzes";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no stored quiz at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("could not serialize quiz list: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage write failed: {0}")]
    Backend(String),
}

/// Almacenamiento clave-valor de cadenas (localStorage, ficheros o memoria).
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Un fichero `<clave>.json` por clave dentro de un directorio.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStorage {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    /// Escribe en `<clave>.json.tmp` y renombra encima del destino: un corte a
    /// mitad de escritura deja intacta la lista anterior.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let backend = |e: std::io::Error| StoreError::Backend(e.to_string());
        std::fs::create_dir_all(&self.dir).map_err(backend)?;
        let target = self.path_for(key);
        let tmp = target.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(backend)?;
        std::fs::rename(&tmp, &target).map_err(backend)
    }
}

/// `window.localStorage` del navegador.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage =
            Self::storage().ok_or_else(|| StoreError::Backend("localStorage no disponible".into()))?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Backend(format!("{err:?}")))
    }
}

/// Backend por defecto de la plataforma.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_storage(config: &crate::config::AppConfig) -> Box<dyn KeyValueStorage> {
    Box::new(FileStorage::new(config.data_dir.clone()))
}

#[cfg(target_arch = "wasm32")]
pub fn platform_storage(_config: &crate::config::AppConfig) -> Box<dyn KeyValueStorage> {
    Box::new(LocalStorage)
}

/// Lista persistida de cuestionarios. Cada operación lee, modifica y vuelve
/// a escribir la lista completa, así nadie ve una lista a medio actualizar.
pub struct QuizStore {
    backend: Box<dyn KeyValueStorage>,
}

// En memoria hasta que la app conecte el backend de la plataforma.
impl Default for QuizStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl QuizStore {
    pub fn new(backend: Box<dyn KeyValueStorage>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::default()))
    }

    /// Lista guardada; clave ausente o corrupta equivale a lista vacía.
    pub fn list(&self) -> Vec<Quiz> {
        let Some(raw) = self.backend.get_item(STORAGE_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(quizzes) => quizzes,
            Err(err) => {
                log::warn!("lista de cuestionarios ilegible en '{STORAGE_KEY}', se ignora: {err}");
                Vec::new()
            }
        }
    }

    /// Añade al final y devuelve la lista resultante.
    pub fn append(&mut self, quiz: Quiz) -> Result<Vec<Quiz>, StoreError> {
        let mut quizzes = self.list();
        quizzes.push(quiz);
        self.persist(&quizzes)?;
        Ok(quizzes)
    }

    /// Elimina la entrada `index`; las posteriores bajan una posición.
    pub fn remove_at(&mut self, index: usize) -> Result<Vec<Quiz>, StoreError> {
        let mut quizzes = self.list();
        if index >= quizzes.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: quizzes.len(),
            });
        }
        let removed = quizzes.remove(index);
        self.persist(&quizzes)?;
        log::info!("cuestionario '{}' eliminado", removed.quiz_title);
        Ok(quizzes)
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&mut self, quizzes: &[Quiz]) -> Result<(), StoreError> {
        let json = serde_json::to_string(quizzes)?;
        self.backend.set_item(STORAGE_KEY, &json)?;
        log::debug!("{} cuestionarios guardados en '{STORAGE_KEY}'", quizzes.len());
        Ok(())
    }
}
