//! src/app/saisie.rs
//!
//! Saisie des chiffres (écran texte) — sans noyau.
//!
//! Contrats :
//! - Premier chiffre après une opération : remplace l’écran.
//! - Chiffres suivants : concaténés.
//! - Un seul '.' par nombre (le second est ignoré).
//! - Lecture de l’écran en nombre : erreur typée, jamais de panique.

use thiserror::Error;

/// Texte affiché quand rien n’a encore été calculé.
pub const ECRAN_VIDE: &str = "0";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurSaisie {
    #[error("saisie vide")]
    Vide,

    #[error("nombre invalide: {texte:?}")]
    Invalide { texte: String },
}

#[derive(Clone, Debug)]
pub struct Saisie {
    ecran: String,
    en_cours: bool,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            ecran: ECRAN_VIDE.to_string(),
            en_cours: false,
        }
    }
}

impl Saisie {
    pub fn ecran(&self) -> &str {
        &self.ecran
    }

    /// Vrai tant que l’utilisateur tape un nombre.
    #[cfg(test)]
    pub fn en_cours(&self) -> bool {
        self.en_cours
    }

    /// Touche chiffre ('0'..='9') ou '.'. Toute autre touche est ignorée.
    pub fn touch_digit(&mut self, chiffre: char) {
        if !(chiffre.is_ascii_digit() || chiffre == '.') {
            return;
        }

        if !self.en_cours {
            self.ecran.clear();
            self.en_cours = true;
        }

        if chiffre == '.' {
            if self.ecran.contains('.') {
                return;
            }
            if self.ecran.is_empty() {
                self.ecran.push('0');
            }
        }

        self.ecran.push(chiffre);
    }

    /// Lit l’écran comme opérande et termine la saisie en cours.
    ///
    /// `None` si aucune saisie n’était en cours (rien à transmettre au moteur).
    pub fn termine(&mut self) -> Option<Result<f64, ErreurSaisie>> {
        if !self.en_cours {
            return None;
        }
        self.en_cours = false;
        Some(lire_nombre(&self.ecran))
    }

    /// Affiche un résultat déjà formaté (fin de saisie).
    pub fn affiche(&mut self, texte: impl Into<String>) {
        self.ecran = texte.into();
        self.en_cours = false;
    }

    /// Escape : abandonne le nombre en cours et remet `dernier` à l’écran.
    pub fn effacer(&mut self, dernier: Option<String>) {
        self.ecran = dernier.unwrap_or_else(|| ECRAN_VIDE.to_string());
        self.en_cours = false;
    }
}

/// "12.5" -> 12.5 ; "" -> Vide ; "1.2.3" -> Invalide.
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurSaisie> {
    let t = texte.trim();
    if t.is_empty() {
        return Err(ErreurSaisie::Vide);
    }
    t.parse::<f64>().map_err(|_| ErreurSaisie::Invalide {
        texte: t.to_string(),
    })
}
