// src/identity.rs

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("patrón de nombre válido"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("patrón de email válido")
});

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Campos con error; cada uno se pinta junto a su input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityErrors {
    pub first_name: bool,
    pub last_name: bool,
    pub email: bool,
}

impl IdentityErrors {
    pub fn any(&self) -> bool {
        self.first_name || self.last_name || self.email
    }
}

impl Identity {
    pub fn validate(&self) -> Result<(), IdentityErrors> {
        let errors = IdentityErrors {
            first_name: !NAME_RE.is_match(&self.first_name),
            last_name: !NAME_RE.is_match(&self.last_name),
            email: !EMAIL_RE.is_match(&self.email),
        };
        if errors.any() { Err(errors) } else { Ok(()) }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
