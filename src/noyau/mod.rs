//! Noyau de calcul à accumulateur
//!
//! Organisation interne :
//! - operations.rs : descripteurs + catalogue immuable (π, e, √, cos, ±, ×, =)
//! - moteur.rs     : accumulateur + opération binaire en attente
//! - format.rs     : affichage d’un résultat (entiers, NaN, ∞)

pub mod format;
pub mod moteur;
pub mod operations;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use format::format_resultat;
pub use moteur::Cerveau;
pub use operations::SYMBOLES;
