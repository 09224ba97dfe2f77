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
// gs_poly_types.rs - Core physics types
// =============================================================================
//
// Ce module définit l'entité centrale du moteur :
// - RigidBody : corps rigide polygonal convexe (sommets locaux CCW,
//   cache monde, état cinématique, propriétés matérielles)
// - ShapeKind : discriminant de forme (réservé pour des spécialisations
//   futures, le cœur du moteur ne traite que le chemin polygone)
//
// INVARIANTS :
// - inverse_mass = 0 si et seulement si is_static ou mass <= 0
// - inverse_inertia = 1/inertia si inertia > 0, sinon 0
// - transformed_vertices est valide quand le flag update est à false
// - les sommets locaux sont exprimés relativement au centre de masse
//
// Toute mutation de pose passe par move_by / rotate / snap_to, qui lèvent
// le flag update. Le monde balaie et reconstruit les caches avant toute
// lecture (voir gs_poly_transform).
//
// =============================================================================

use crate::gs_poly_renderer::{colors, PhyColor};
use crate::gs_poly_vec2::Vec2;

use std::f32::consts::PI;

// =============================================================================
// ShapeKind - Discriminant de forme
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    #[default]
    Polygon,
}

// =============================================================================
// RigidBody - Corps rigide
// =============================================================================
//
// Représente un polygone convexe dans le monde physique.
//
// GÉOMÉTRIE :
// Les sommets locaux sont ordonnés en sens trigonométrique (CCW) autour du
// centre de masse. Les sommets monde sont un cache reconstruit à la demande
// (flag update).
//
// MASSE ET INERTIE :
// On stocke la masse inverse (1/m) et l'inertie inverse (1/I) : les corps
// statiques ont simplement un inverse nul, aucune branche spéciale dans le
// solveur.
//
// =============================================================================

#[derive(Clone, Debug)]
pub struct RigidBody {
    /// Discriminant de forme (le cœur ne traite que Polygon)
    pub shape: ShapeKind,

    /// Nombre de côtés du polygone régulier (0 pour une boîte)
    pub sides: u32,

    /// Rayon du cercle circonscrit (0 pour une boîte)
    pub radius: f32,

    /// Force accumulée, remise à zéro après chaque intégration
    pub force: Vec2,

    /// Position du centre de masse
    pub position: Vec2,

    /// Rotation en radians
    pub rotation: f32,

    /// Vitesse linéaire
    pub linear_velocity: Vec2,

    /// Accélération linéaire (écrasée par la gravité à chaque intégration)
    pub linear_acceleration: Vec2,

    /// Vitesse angulaire (rad/s)
    pub angular_velocity: f32,

    /// Accélération angulaire (rad/s²)
    pub angular_acceleration: f32,

    /// Couleur ARGB, opaque pour la physique (utilisée par le rendu)
    pub colour: PhyColor,

    /// Moment d'inertie
    pub inertia: f32,

    /// Inertie inverse (0 = le corps ne peut pas tourner)
    pub inverse_inertia: f32,

    /// Masse
    pub mass: f32,

    /// Masse inverse (0 = masse infinie)
    pub inverse_mass: f32,

    /// Coefficient de restitution, dans [0, 1]
    pub restitution: f32,

    /// Coefficient de frottement statique
    pub static_friction: f32,

    /// Coefficient de frottement dynamique
    pub dynamic_friction: f32,

    /// Corps immobile : jamais intégré, masse inverse nulle
    pub is_static: bool,

    /// Sommets locaux, CCW, relatifs au centre de masse
    pub vertices: Vec<Vec2>,

    /// Sommets monde (cache)
    pub transformed_vertices: Vec<Vec2>,

    /// Flag "à reconstruire" : levé par toute mutation de pose
    pub update: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Polygon,
            sides: 0,
            radius: 0.0,
            force: Vec2::ZERO,
            position: Vec2::ZERO,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            linear_acceleration: Vec2::ZERO,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            colour: colors::WHITE,
            inertia: 0.0,
            inverse_inertia: 0.0,
            mass: 0.0,
            inverse_mass: 0.0,
            restitution: 0.0,
            static_friction: DEFAULT_STATIC_FRICTION,
            dynamic_friction: DEFAULT_DYNAMIC_FRICTION,
            is_static: false,
            vertices: Vec::new(),
            transformed_vertices: Vec::new(),
            update: true,
        }
    }
}

/// Frottement statique par défaut des corps construits
pub const DEFAULT_STATIC_FRICTION: f32 = 0.6;

/// Frottement dynamique par défaut des corps construits
pub const DEFAULT_DYNAMIC_FRICTION: f32 = 0.4;

// =============================================================================
// Génération de géométrie et dérivations masse/inertie
// =============================================================================

/// Génère les sommets d'un polygone régulier, en sens trigonométrique,
/// premier sommet pointant vers le bas (angle de départ -π/2)
pub fn generate_regular_polygon(sides: u32, radius: f32) -> Vec<Vec2> {
    let mut verts = Vec::new();
    if sides < 3 {
        return verts;
    }
    verts.reserve(sides as usize);

    // Angle entre deux sommets consécutifs
    let d_theta = 2.0 * PI / sides as f32;
    let start_angle = -PI / 2.0;

    for i in 0..sides {
        let theta = start_angle + i as f32 * d_theta;
        verts.push(Vec2::new(radius * theta.cos(), radius * theta.sin()));
    }

    verts
}

/// Moment d'inertie d'un polygone régulier de masse m inscrit dans r :
/// (m·r²/12)·(3 + cos(2π/n))
pub fn compute_regular_polygon_inertia(sides: u32, mass: f32, radius: f32) -> f32 {
    if sides < 3 || mass <= 0.0 {
        // Polygone invalide ou objet statique
        return 0.0;
    }
    let angle = 2.0 * PI / sides as f32;
    (mass * radius * radius / 12.0) * (3.0 + angle.cos())
}

#[inline]
fn compute_inverse_mass(mass: f32, is_static: bool) -> f32 {
    if is_static || mass <= 0.0 {
        0.0
    } else {
        1.0 / mass
    }
}

#[inline]
fn compute_inverse_inertia(inertia: f32) -> f32 {
    if inertia > 0.0 {
        1.0 / inertia
    } else {
        0.0
    }
}

impl RigidBody {
    /// Construit un polygone régulier dynamique
    ///
    /// # Arguments
    /// * `sides` - Nombre de côtés (>= 3)
    /// * `radius` - Rayon du cercle circonscrit
    /// * `mass` - Masse (<= 0 : corps traité comme statique)
    pub fn new_polygon(sides: u32, radius: f32, mass: f32) -> Self {
        let inertia = compute_regular_polygon_inertia(sides, mass, radius);
        Self {
            shape: ShapeKind::Polygon,
            sides,
            radius,
            mass,
            inertia,
            inverse_inertia: compute_inverse_inertia(inertia),
            inverse_mass: compute_inverse_mass(mass, false),
            vertices: generate_regular_polygon(sides, radius),
            ..Self::default()
        }
    }

    /// Pose les quatre sommets d'une boîte centrée, en sens trigonométrique,
    /// et reconstruit immédiatement le cache monde
    pub fn set_box_vertices(&mut self, width: f32, height: f32) {
        let left = -width / 2.0;
        let right = left + width;
        let bottom = -height / 2.0;
        let top = bottom + height;

        self.shape = ShapeKind::Rectangle;
        self.vertices = vec![
            Vec2::new(right, top),
            Vec2::new(left, top),
            Vec2::new(left, bottom),
            Vec2::new(right, bottom),
        ];

        self.update = true;
        crate::gs_poly_transform::world_space(self);
    }

    // =========================================================================
    // Mutations de pose - lèvent toutes le flag update
    // =========================================================================

    /// Déplace le corps d'un delta
    #[inline]
    pub fn move_by(&mut self, amount: Vec2) {
        self.position += amount;
        self.update = true;
    }

    /// Tourne le corps d'un delta en radians
    #[inline]
    pub fn rotate(&mut self, radians: f32) {
        self.rotation += radians;
        self.update = true;
    }

    /// Téléporte le corps à une position absolue
    #[inline]
    pub fn snap_to(&mut self, pos: Vec2) {
        self.position = pos;
        self.update = true;
    }

    // =========================================================================
    // Mutations de masse - maintiennent les inverses cohérents
    // =========================================================================

    /// Marque le corps comme statique ou dynamique et redérive les inverses
    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
        self.inverse_mass = compute_inverse_mass(self.mass, is_static);
        self.inverse_inertia = if is_static {
            0.0
        } else {
            compute_inverse_inertia(self.inertia)
        };
    }

    /// Change la masse et redérive la masse inverse
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
        self.inverse_mass = compute_inverse_mass(mass, self.is_static);
    }
}

// =============================================================================
// Tests unitaires
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gs_poly_vec2::vec_closely_equal;

    #[test]
    fn test_regular_polygon_winding() {
        // Carré (4-gon) : premier sommet en bas, puis sens trigonométrique
        let verts = generate_regular_polygon(4, 1.0);
        assert_eq!(verts.len(), 4);
        assert!(vec_closely_equal(verts[0], Vec2::new(0.0, -1.0)));
        assert!(vec_closely_equal(verts[1], Vec2::new(1.0, 0.0)));
        assert!(vec_closely_equal(verts[2], Vec2::new(0.0, 1.0)));
        assert!(vec_closely_equal(verts[3], Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_degenerate_polygon() {
        // Moins de 3 côtés : pas de sommets, inertie nulle
        assert!(generate_regular_polygon(2, 1.0).is_empty());
        let body = RigidBody::new_polygon(2, 1.0, 2.0);
        assert_eq!(body.inertia, 0.0);
        assert_eq!(body.inverse_inertia, 0.0);
    }

    #[test]
    fn test_polygon_inertia() {
        // (2·1²/12)·(3 + cos(π/2)) = 0.5, inverse = 2.0
        let body = RigidBody::new_polygon(4, 1.0, 2.0);
        assert!((body.inertia - 0.5).abs() < 1e-5);
        assert!((body.inverse_inertia - 2.0).abs() < 1e-4);
        assert!((body.inverse_mass - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_non_positive_mass_is_static_like() {
        let body = RigidBody::new_polygon(4, 1.0, 0.0);
        assert_eq!(body.inverse_mass, 0.0);
        assert_eq!(body.inertia, 0.0);
        assert_eq!(body.inverse_inertia, 0.0);
    }

    #[test]
    fn test_set_static_zeroes_inverses() {
        let mut body = RigidBody::new_polygon(4, 1.0, 2.0);
        body.set_static(true);
        assert_eq!(body.inverse_mass, 0.0);
        assert_eq!(body.inverse_inertia, 0.0);

        // Retour au dynamique : inverses redérivés
        body.set_static(false);
        assert!((body.inverse_mass - 0.5).abs() < 1e-6);
        assert!((body.inverse_inertia - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_box_vertices() {
        let mut body = RigidBody::default();
        body.set_box_vertices(2.0, 4.0);
        assert_eq!(body.vertices.len(), 4);
        assert_eq!(body.shape, ShapeKind::Rectangle);
        assert!(vec_closely_equal(body.vertices[0], Vec2::new(1.0, 2.0)));
        assert!(vec_closely_equal(body.vertices[2], Vec2::new(-1.0, -2.0)));
        // Le cache monde est reconstruit immédiatement
        assert!(!body.update);
        assert_eq!(body.transformed_vertices.len(), 4);
    }

    #[test]
    fn test_pose_mutations_set_dirty_flag() {
        let mut body = RigidBody::new_polygon(4, 1.0, 2.0);
        crate::gs_poly_transform::world_space(&mut body);
        assert!(!body.update);

        body.move_by(Vec2::new(1.0, 0.0));
        assert!(body.update);

        crate::gs_poly_transform::world_space(&mut body);
        body.rotate(0.5);
        assert!(body.update);

        crate::gs_poly_transform::world_space(&mut body);
        body.snap_to(Vec2::new(5.0, 5.0));
        assert!(body.update);
    }
}
