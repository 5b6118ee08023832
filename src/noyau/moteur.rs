//! Noyau — moteur à accumulateur
//!
//! Modèle : un accumulateur optionnel + au plus UNE opération binaire en attente.
//!
//! Contrats :
//! - Toute séquence incomplète (pas d’opérande, pas d’opération en attente,
//!   symbole inconnu) est un no-op silencieux : pas d’erreur, pas de panique.
//! - Pas de priorité ni d’enchaînement : une nouvelle opération binaire
//!   remplace celle en attente.
//! - Aucun contrôle de domaine : NaN / ∞ sont exposés tels quels par `resultat()`.

use num_traits::float::FloatConst;
use num_traits::Float;

use super::operations::{Catalogue, Operation};

/// Opération binaire capturée avec son premier opérande.
#[derive(Clone, Copy, Debug)]
struct OperationEnAttente<T> {
    fonction: fn(T, T) -> T,
    premier_operande: T,
}

impl<T> OperationEnAttente<T> {
    fn effectue(&self, second_operande: T) -> T
    where
        T: Copy,
    {
        (self.fonction)(self.premier_operande, second_operande)
    }
}

/// Moteur de calcul (une instance par session).
#[derive(Clone, Debug)]
pub struct Cerveau<T> {
    accumulateur: Option<T>,
    en_attente: Option<OperationEnAttente<T>>,
    catalogue: Catalogue<T>,
}

impl<T: Float + FloatConst> Default for Cerveau<T> {
    fn default() -> Self {
        Self {
            accumulateur: None,
            en_attente: None,
            catalogue: Catalogue::default(),
        }
    }
}

impl<T: Float + FloatConst> Cerveau<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Float> Cerveau<T> {
    /// Écrase l’accumulateur (aucune validation).
    pub fn set_operande(&mut self, operande: T) {
        self.accumulateur = Some(operande);
    }

    /// Applique le symbole. Symbole inconnu => rien.
    pub fn perform_operation(&mut self, symbole: &str) {
        let Some(operation) = self.catalogue.get(symbole) else {
            return;
        };

        match operation {
            Operation::Constante(valeur) => {
                self.accumulateur = Some(valeur);
            }
            Operation::Unaire(f) => {
                if let Some(x) = self.accumulateur {
                    self.accumulateur = Some(f(x));
                }
            }
            Operation::Binaire(f) => {
                // take() : l’accumulateur est consommé par la capture
                if let Some(x) = self.accumulateur.take() {
                    self.en_attente = Some(OperationEnAttente {
                        fonction: f,
                        premier_operande: x,
                    });
                }
            }
            Operation::Egal => self.resout_en_attente(),
        }
    }

    /// Résout l’opération en attente si ET seulement si le second opérande est là.
    fn resout_en_attente(&mut self) {
        if let (Some(op), Some(x)) = (self.en_attente, self.accumulateur) {
            self.accumulateur = Some(op.effectue(x));
            self.en_attente = None;
        }
    }

    /// Valeur courante (None si jamais posée ou consommée par une opération binaire).
    pub fn resultat(&self) -> Option<T> {
        self.accumulateur
    }

    /// Vrai si une opération binaire attend son second opérande.
    pub fn a_operation_en_attente(&self) -> bool {
        self.en_attente.is_some()
    }
}
