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
// gs_poly_transform.rs - Transformation locale vers monde
// =============================================================================
//
// Convertit les sommets d'un corps de l'espace local (relatif au centre de
// masse) vers l'espace monde : rotation standard 2D puis translation.
//
// Le cache transformed_vertices n'est reconstruit que si le flag update du
// corps est levé (ou si le cache est vide). La reconstruction est
// idempotente : rappeler world_space sur un corps propre ne fait rien.
//
// =============================================================================

use crate::gs_poly_types::RigidBody;
use crate::gs_poly_vec2::Vec2;

// =============================================================================
// Transform - Pose rigide 2D (translation + rotation)
// =============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct Transform {
    /// Position de la transformation
    pub position: Vec2,

    /// Rotation en radians
    pub rotation: f32,
}

impl Transform {
    #[inline]
    pub const fn new(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Applique cette transformation à un point local, retourne le point monde
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        // Matrice de rotation 2D standard
        let c = self.rotation.cos();
        let s = self.rotation.sin();
        let rotated = Vec2::new(p.x * c - p.y * s, p.x * s + p.y * c);
        rotated + self.position
    }
}

// =============================================================================
// Reconstruction du cache monde
// =============================================================================

/// Met à jour les sommets monde d'un corps depuis ses sommets locaux.
/// Ne fait rien si le cache est déjà à jour.
pub fn world_space(body: &mut RigidBody) {
    if !body.update && !body.transformed_vertices.is_empty() {
        return;
    }

    let t = Transform::new(body.position, body.rotation);

    body.transformed_vertices.clear();
    body.transformed_vertices.reserve(body.vertices.len());

    for &local in &body.vertices {
        body.transformed_vertices.push(t.apply(local));
    }

    // Le cache est à jour
    body.update = false;
}

// =============================================================================
// Tests unitaires
// =============================================================================
