// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran en haut (aligné à droite, grande police)
// - Pavé : chiffres + '.' à gauche, opérations du catalogue à droite
// - Clavier : chiffres/'.', '*' ou 'x' => ×, '=' ou Enter => =, Escape => efface la saisie

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::SYMBOLES;

const TAILLE_TOUCHE: [f32; 2] = [56.0, 40.0];
const TAILLE_ECRAN: f32 = 32.0;

/// Touches du pavé numérique, ligne par ligne.
const PAVE: [[char; 3]; 4] = [
    ['7', '8', '9'],
    ['4', '5', '6'],
    ['1', '2', '3'],
    ['0', '.', ' '],
];

/// Ce que le clavier physique a demandé pendant cette frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Touche {
    Chiffre(char),
    Operation(&'static str),
}

/// Caractère tapé -> touche de la calculatrice (None = ignoré).
fn touche_texte(c: char) -> Option<Touche> {
    match c {
        '0'..='9' | '.' => Some(Touche::Chiffre(c)),
        '*' | 'x' => Some(Touche::Operation("×")),
        '=' => Some(Touche::Operation("=")),
        _ => None,
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_clavier(ui);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            self.ui_pave_numerique(ui);
            ui.separator();
            self.ui_operations(ui);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(self.ecran())
                        .size(TAILLE_ECRAN)
                        .monospace(),
                );
                // opération binaire capturée, second opérande attendu
                if self.cerveau.a_operation_en_attente() {
                    ui.weak("×");
                }
            });
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for c in ligne {
                        if c == ' ' {
                            ui.label("");
                            continue;
                        }
                        let b = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(c.to_string()));
                        if b.clicked() {
                            self.touch_digit(c);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_operations(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_operations")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, symbole) in SYMBOLES.iter().enumerate() {
                    let b = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(*symbole));
                    if b.clicked() {
                        self.perform_operation(symbole);
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }

    /// Clavier physique (une seule lecture des événements par frame).
    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        let touches: Vec<Touche> = ui.input(|i| {
            let mut out = Vec::new();
            for ev in &i.events {
                match ev {
                    egui::Event::Text(t) => out.extend(t.chars().filter_map(touche_texte)),
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => out.push(Touche::Operation("=")),
                    _ => {}
                }
            }
            out
        });

        for t in touches {
            match t {
                Touche::Chiffre(c) => self.touch_digit(c),
                Touche::Operation(s) => self.perform_operation(s),
            }
        }
    }
}
