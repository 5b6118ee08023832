//! Tests fuzz safe : suites aléatoires d’événements (opérande | symbole).
//!
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants vérifiés après CHAQUE événement :
//!   * symbole inconnu => état inchangé
//!   * opération binaire capturée => résultat absent
//!   * "=" réussi => plus d’opération en attente
//!   * même seed => mêmes résultats

use std::time::{Duration, Instant};

use super::{Cerveau, SYMBOLES};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’événements ------------------------ */

#[derive(Clone, Debug)]
enum Evenement {
    Operande(f64),
    Symbole(&'static str),
}

const INCONNUS: [&str; 4] = ["?", "x", "sin", ""];

fn gen_evenement(rng: &mut Rng) -> Evenement {
    match rng.pick(10) {
        0..=3 => {
            let v = match rng.pick(6) {
                0 => 0.0,
                1 => -4.0,
                2 => 0.5,
                3 => 1e300,
                4 => f64::NAN,
                _ => rng.pick(100) as f64,
            };
            Evenement::Operande(v)
        }
        4 => Evenement::Symbole(INCONNUS[rng.pick(INCONNUS.len() as u32) as usize]),
        _ => Evenement::Symbole(SYMBOLES[rng.pick(SYMBOLES.len() as u32) as usize]),
    }
}

fn bits(r: Option<f64>) -> Option<u64> {
    r.map(f64::to_bits)
}

/// Joue une suite et vérifie les invariants ; retourne la trace des résultats.
fn joue(seed: u64, n: usize) -> Vec<Option<u64>> {
    let mut rng = Rng::new(seed);
    let mut c = Cerveau::<f64>::new();
    let mut trace = Vec::with_capacity(n);

    for _ in 0..n {
        let ev = gen_evenement(&mut rng);

        let avant = bits(c.resultat());
        let attente_avant = c.a_operation_en_attente();

        match &ev {
            Evenement::Operande(v) => {
                c.set_operande(*v);
                assert_eq!(bits(c.resultat()), Some(v.to_bits()));
            }
            Evenement::Symbole(s) => {
                c.perform_operation(s);

                if INCONNUS.contains(s) {
                    assert_eq!(bits(c.resultat()), avant, "symbole inconnu {s:?}");
                    assert_eq!(c.a_operation_en_attente(), attente_avant);
                }
                if *s == "×" && avant.is_some() {
                    assert_eq!(c.resultat(), None);
                    assert!(c.a_operation_en_attente());
                }
                if *s == "=" && attente_avant && avant.is_some() {
                    assert!(!c.a_operation_en_attente());
                    assert!(c.resultat().is_some());
                }
                if *s == "=" && (!attente_avant || avant.is_none()) {
                    assert_eq!(bits(c.resultat()), avant, "= inerte");
                }
            }
        }

        trace.push(bits(c.resultat()));
    }

    trace
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    for seed in [0xC0FFEE_u64, 0xBADC0DE, 1, 42] {
        budget(t0, max);
        let trace = joue(seed, 500);
        assert_eq!(trace.len(), 500);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let a = joue(0xC0FFEE_u64, 300);
    budget(t0, max);
    let b = joue(0xC0FFEE_u64, 300);
    assert_eq!(a, b);
}
