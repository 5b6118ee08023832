// src/noyau/operations.rs
//
// Catalogue des opérations (symbole -> descripteur)
// Objectif:
// - Un descripteur = exactement une variante (constante, unaire, binaire, égal)
// - Catalogue construit une seule fois, jamais modifié ensuite
//
// Règles:
// - Les fonctions sont des pointeurs `fn` (pures, sans capture)
// - Aucun contrôle de domaine : √(-4) donne NaN, c’est voulu

use std::collections::HashMap;

use num_traits::float::FloatConst;
use num_traits::Float;

/// Descripteur d’opération.
#[derive(Clone, Copy, Debug)]
pub enum Operation<T> {
    /// Valeur fixe (π, e).
    Constante(T),
    /// Fonction d’un argument (√, cos, ±).
    Unaire(fn(T) -> T),
    /// Fonction de deux arguments, différée jusqu’au second opérande.
    Binaire(fn(T, T) -> T),
    /// Résout l’opération binaire en attente.
    Egal,
}

/// Symboles du catalogue, dans l’ordre d’affichage du pavé.
pub const SYMBOLES: [&str; 7] = ["π", "e", "√", "cos", "±", "×", "="];

pub fn change_signe<T: Float>(x: T) -> T {
    -x
}

pub fn multiplie<T: Float>(a: T, b: T) -> T {
    a * b
}

/// Catalogue immuable.
#[derive(Clone, Debug)]
pub struct Catalogue<T> {
    table: HashMap<&'static str, Operation<T>>,
}

impl<T: Float + FloatConst> Default for Catalogue<T> {
    fn default() -> Self {
        let table = HashMap::from([
            ("π", Operation::Constante(T::PI())),
            ("e", Operation::Constante(T::E())),
            ("√", Operation::Unaire(T::sqrt as fn(T) -> T)),
            ("cos", Operation::Unaire(T::cos as fn(T) -> T)),
            ("±", Operation::Unaire(change_signe::<T> as fn(T) -> T)),
            ("×", Operation::Binaire(multiplie::<T> as fn(T, T) -> T)),
            ("=", Operation::Egal),
        ]);
        Self { table }
    }
}

impl<T: Copy> Catalogue<T> {
    /// Cherche un symbole. `None` = symbole inconnu (ignoré par le moteur).
    pub fn get(&self, symbole: &str) -> Option<Operation<T>> {
        self.table.get(symbole).copied()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Operation<T>)> + '_ {
        self.table.iter().map(|(k, v)| (*k, *v))
    }
}
