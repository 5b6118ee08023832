// src/noyau/format.rs
//
// Affichage d’un résultat numérique (écran de la calculatrice).
// - entier fini      -> sans partie décimale ("15", "-7")
// - autre fini       -> représentation la plus courte qui relit la même valeur
// - très grand/petit -> notation exponentielle ("1e300", "1e-300")
// - NaN / ±∞         -> "NaN", "∞", "-∞" (le moteur ne filtre rien)

use std::fmt::Debug;

use num_traits::Float;

pub fn format_resultat<T: Float + Debug>(x: T) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_negative() { "-∞" } else { "∞" }.to_string();
    }
    // -0 s’affiche "0"
    if x.is_zero() {
        return "0".to_string();
    }
    // Debug : exposant au-delà de ~1e16 / en deçà de ~1e-5, ".0" pour les entiers
    let texte = format!("{x:?}");
    match texte.strip_suffix(".0") {
        Some(entier) => entier.to_string(),
        None => texte,
    }
}
