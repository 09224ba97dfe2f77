// ============================================================================
// GS.Poly2D - Open source 2D rigid body physics engine
// 2026, Vincent Gsell
//
// This library is free software; you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public
// License as published by the Free Software Foundation; either
// version 2.1 of the License, or (at your option) any later version.
//
// This library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License along with this library; if not, write to the Free Software
// Foundation, Inc., 51 Franklin Street, Fifth Floor, Boston, MA  02110-1301  USA
//
// Created by Vincent Gsell [https://github.com/VincentGsell]
// ============================================================================

// History
// 20260612 - Rust port created.

// =============================================================================
// gs_poly_renderer.rs - Couleurs et utilitaires de rendu
// =============================================================================
//
// Ce module fournit :
// - PhyColor : couleur ARGB 32 bits, le type du champ colour des corps
// - Une palette de constantes, assemblées par phy_color()
// - Un dégradé vitesse → couleur, interpolé sur les arrêts de la palette
//
// La physique ne lit jamais ces valeurs : la couleur d'un corps est un
// simple champ opaque transporté jusqu'au rendu. Le dessin des polygones
// lui-même est fait directement avec macroquad dans la démo, depuis les
// sommets monde des corps.
//
// =============================================================================

use crate::gs_poly_vec2::Vec2;

// =============================================================================
// PhyColor - Couleur ARGB 32 bits
// =============================================================================
//
// Format : 0xAARRGGBB
// - AA : Alpha (transparence, FF = opaque)
// - RR : Rouge (00-FF)
// - GG : Vert (00-FF)
// - BB : Bleu (00-FF)
//
// =============================================================================

pub type PhyColor = u32;

/// Décalages de bits des canaux dans une couleur ARGB
const SHIFT_A: u32 = 24;
const SHIFT_R: u32 = 16;
const SHIFT_G: u32 = 8;
const SHIFT_B: u32 = 0;

/// Assemble une couleur opaque depuis ses trois canaux
#[inline]
pub const fn phy_color(r: u8, g: u8, b: u8) -> PhyColor {
    (0xFF << SHIFT_A) | ((r as u32) << SHIFT_R) | ((g as u32) << SHIFT_G) | ((b as u32) << SHIFT_B)
}

/// Extrait un canal 8 bits d'une couleur
#[inline]
const fn channel(color: PhyColor, shift: u32) -> u8 {
    ((color >> shift) & 0xFF) as u8
}

/// Module de couleurs prédéfinies
pub mod colors {
    use super::{phy_color, PhyColor};

    pub const WHITE: PhyColor = phy_color(255, 255, 255);
    pub const BLACK: PhyColor = phy_color(0, 0, 0);
    pub const RED: PhyColor = phy_color(255, 0, 0);
    pub const GREEN: PhyColor = phy_color(0, 255, 0);
    pub const BLUE: PhyColor = phy_color(0, 0, 255);
    pub const YELLOW: PhyColor = phy_color(255, 255, 0);
    pub const CYAN: PhyColor = phy_color(0, 255, 255);
    pub const MAGENTA: PhyColor = phy_color(255, 0, 255);
    pub const GRAY: PhyColor = phy_color(128, 128, 128);
    pub const LIGHT_GRAY: PhyColor = phy_color(211, 211, 211);
    pub const DARK_GRAY: PhyColor = phy_color(64, 64, 64);
}

// =============================================================================
// Dégradé vitesse → couleur
// =============================================================================
//
// Gradient "thermique" intuitif, défini par des arrêts sur la palette :
// Bleu (lent) → Cyan → Vert → Jaune → Rouge (rapide). Entre deux arrêts,
// les canaux sont interpolés linéairement.
//
// =============================================================================

/// Arrêts du dégradé thermique : (vitesse normalisée, couleur)
const THERMAL_STOPS: [(f32, PhyColor); 5] = [
    (0.0, colors::BLUE),
    (0.25, colors::CYAN),
    (0.5, colors::GREEN),
    (0.75, colors::YELLOW),
    (1.0, colors::RED),
];

/// Interpolation linéaire canal par canal entre deux couleurs
fn lerp_color(from: PhyColor, to: PhyColor, f: f32) -> PhyColor {
    let mix = |shift: u32| -> u8 {
        let a = channel(from, shift) as f32;
        let b = channel(to, shift) as f32;
        (a + (b - a) * f) as u8
    };
    phy_color(mix(SHIFT_R), mix(SHIFT_G), mix(SHIFT_B))
}

/// Couleur d'un corps selon sa vitesse (dégradé thermique)
///
/// # Arguments
/// * `velocity` - Vitesse linéaire du corps
/// * `max_speed` - Vitesse à laquelle le dégradé sature au rouge
pub fn velocity_to_color(velocity: Vec2, max_speed: f32) -> PhyColor {
    let t = (velocity.length() / max_speed).clamp(0.0, 1.0);

    // Cherche le segment [lo, hi] du dégradé contenant t
    for pair in THERMAL_STOPS.windows(2) {
        let (lo_t, lo_c) = pair[0];
        let (hi_t, hi_c) = pair[1];
        if t <= hi_t {
            let f = (t - lo_t) / (hi_t - lo_t);
            return lerp_color(lo_c, hi_c, f);
        }
    }

    colors::RED
}

// =============================================================================
// Conversions
// =============================================================================

/// Décompose une couleur en tuple (r, g, b, a) normalisé dans [0, 1]
pub fn color_to_rgba(color: PhyColor) -> (f32, f32, f32, f32) {
    let norm = |shift: u32| channel(color, shift) as f32 / 255.0;
    (norm(SHIFT_R), norm(SHIFT_G), norm(SHIFT_B), norm(SHIFT_A))
}

/// Convertit une couleur PhyColor en Color de macroquad
#[cfg(feature = "macroquad")]
pub fn to_macroquad_color(color: PhyColor) -> macroquad::prelude::Color {
    let (r, g, b, a) = color_to_rgba(color);
    macroquad::prelude::Color::new(r, g, b, a)
}

// =============================================================================
// Tests unitaires
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phy_color_packing() {
        let c = phy_color(0x12, 0x34, 0x56);
        assert_eq!(c, 0xFF123456);
        assert_eq!(channel(c, SHIFT_R), 0x12);
        assert_eq!(channel(c, SHIFT_G), 0x34);
        assert_eq!(channel(c, SHIFT_B), 0x56);
        assert_eq!(channel(c, SHIFT_A), 0xFF);
    }

    #[test]
    fn test_velocity_to_color_endpoints() {
        // Immobile = bleu, vitesse max = rouge
        assert_eq!(velocity_to_color(Vec2::ZERO, 15.0), colors::BLUE);
        assert_eq!(velocity_to_color(Vec2::new(15.0, 0.0), 15.0), colors::RED);
        // Au-delà de max_speed : sature au rouge
        assert_eq!(velocity_to_color(Vec2::new(40.0, 0.0), 15.0), colors::RED);
    }

    #[test]
    fn test_velocity_to_color_stops() {
        // Les arrêts du dégradé tombent exactement sur la palette
        assert_eq!(velocity_to_color(Vec2::new(7.5, 0.0), 15.0), colors::GREEN);
        // Triangle 3-4-5 : |(9, 12)| = 15
        assert_eq!(velocity_to_color(Vec2::new(9.0, 12.0), 15.0), colors::RED);
    }

    #[test]
    fn test_lerp_color_midpoint() {
        // À mi-chemin entre noir et blanc : gris moyen sur chaque canal
        let mid = lerp_color(colors::BLACK, colors::WHITE, 0.5);
        assert_eq!(channel(mid, SHIFT_R), 127);
        assert_eq!(channel(mid, SHIFT_G), 127);
        assert_eq!(channel(mid, SHIFT_B), 127);
    }

    #[test]
    fn test_color_to_rgba() {
        let (r, g, b, a) = color_to_rgba(0xFFFF8040);
        assert!((a - 1.0).abs() < 0.01);
        assert!((r - 1.0).abs() < 0.01);
        assert!((g - 0.5).abs() < 0.1);
        assert!((b - 0.25).abs() < 0.1);
    }
}
