//! src/app/etat.rs
//!
//! État UI : écran (saisie) + moteur.
//!
//! Rôle : relier les touches au noyau, sans aucune logique d’affichage egui.
//!
//! Contrats :
//! - Une touche opération transmet d’abord le nombre en cours (s’il y en a un).
//! - L’écran n’est mis à jour que si le moteur a un résultat
//!   (ex: après "5 ×", l’écran garde "5").
//! - Une saisie illisible n’atteint jamais le moteur (journalisée en warn).

use log::{debug, warn};

use super::saisie::Saisie;
use crate::noyau::{format_resultat, Cerveau};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub saisie: Saisie,
    pub cerveau: Cerveau<f64>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            saisie: Saisie::default(),
            cerveau: Cerveau::new(),
        }
    }
}

impl AppCalc {
    pub fn ecran(&self) -> &str {
        self.saisie.ecran()
    }

    /// Touche chiffre ou '.'.
    pub fn touch_digit(&mut self, chiffre: char) {
        debug!("touche chiffre {chiffre:?}");
        self.saisie.touch_digit(chiffre);
    }

    /// Touche opération (π, e, √, cos, ±, ×, =, ou n’importe quel texte).
    pub fn perform_operation(&mut self, symbole: &str) {
        debug!("touche opération {symbole:?}");

        match self.saisie.termine() {
            Some(Ok(x)) => self.cerveau.set_operande(x),
            Some(Err(e)) => warn!("saisie rejetée: {e}"),
            None => {}
        }

        self.cerveau.perform_operation(symbole);

        if let Some(r) = self.cerveau.resultat() {
            self.saisie.affiche(format_resultat(r));
        }
    }

    /// Escape : abandonne le nombre en cours (le moteur n’est pas touché).
    pub fn clear_entree(&mut self) {
        let dernier = self.cerveau.resultat().map(format_resultat);
        self.saisie.effacer(dernier);
    }
}
