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
// lib.rs - Library entry point
// =============================================================================
//
// GS.Poly2D est un moteur physique 2D à impulsions pour polygones convexes.
//
// CARACTÉRISTIQUES :
// - Corps rigides polygonaux (rotation, inertie, restitution, frottement)
// - Phase large par spatial hash (grille uniforme hachée, O(n))
// - Phase étroite SAT avec extraction des points de contact
// - Solveur séquentiel à impulsions avec frottement de Coulomb
// - Correction de position de type Baumgarte contre l'enfoncement
//
// UTILISATION BASIQUE :
// ```rust
// use gs_poly2d::prelude::*;
//
// let mut world = PhyWorld::new();
//
// // Un sol statique
// let mut floor = RigidBody::default();
// floor.set_box_vertices(30.0, 1.0);
// floor.snap_to(Vec2::new(0.0, -10.0));
// floor.set_static(true);
// world.add_body(floor);
//
// // Un polygone dynamique lâché au-dessus
// let mut hexagon = RigidBody::new_polygon(6, 1.0, 2.0);
// hexagon.snap_to(Vec2::new(0.0, 5.0));
// hexagon.restitution = 0.4;
// world.add_body(hexagon);
//
// // Boucle de simulation
// for _ in 0..120 {
//     world.step(1.0 / 120.0);
// }
// ```
//
// =============================================================================

// Déclaration des modules
pub mod gs_poly_vec2;
pub mod gs_poly_types;
pub mod gs_poly_transform;
pub mod gs_poly_aabb;
pub mod gs_poly_spatial_hash;
pub mod gs_poly_collision;
pub mod gs_poly_solver;
pub mod gs_poly_world;
pub mod gs_poly_renderer;

// Ré-exportations pour un accès facile
// Permet d'écrire `use gs_poly2d::PhyWorld;` au lieu de
// `use gs_poly2d::gs_poly_world::PhyWorld;`

pub use gs_poly_vec2::{
    float_closely_equal, float_cross, point_segment_distance, vec2, vec_closely_equal, Vec2,
};
pub use gs_poly_types::{RigidBody, ShapeKind};
pub use gs_poly_transform::{world_space, Transform};
pub use gs_poly_aabb::{aabb_intersection, get_aabb, Aabb};
pub use gs_poly_spatial_hash::{build_pairs_from_aabbs, GridConfig};
pub use gs_poly_collision::{sat_collision, Manifold};
pub use gs_poly_solver::{positional_correction, resolve_collision};
pub use gs_poly_world::{PhyWorld, WorldStats};
pub use gs_poly_renderer::{color_to_rgba, colors, velocity_to_color, PhyColor};

// =============================================================================
// Prélude - imports communs en une seule ligne
// =============================================================================
//
// Permet d'écrire :
// ```rust
// use gs_poly2d::prelude::*;
// ```
//
// =============================================================================

pub mod prelude {
    pub use crate::gs_poly_aabb::Aabb;
    pub use crate::gs_poly_collision::Manifold;
    pub use crate::gs_poly_renderer::{colors, velocity_to_color, PhyColor};
    pub use crate::gs_poly_types::{RigidBody, ShapeKind};
    pub use crate::gs_poly_vec2::{vec2, Vec2};
    pub use crate::gs_poly_world::{PhyWorld, WorldStats};
}
