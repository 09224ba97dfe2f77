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
// gs_poly_world.rs - Monde physique et boucle de simulation
// =============================================================================
//
// Ce module est le cœur du moteur. Le monde possède tous les corps (stockés
// par valeur) et les fait avancer d'un pas de temps.
//
// PIPELINE DE SIMULATION (méthode step()) :
// 1. Intégration d'Euler des corps non statiques (gravité, vitesses, pose)
// 2. Élimination des corps tombés sous la borne basse du monde
// 3. Boucle du solveur, répétée solver_iterations fois :
//    a. Reconstruction des caches monde et calcul des AABB
//    b. Paires candidates via le spatial hash
//    c. Par paire : skip deux-statiques, test AABB, SAT, impulsions et
//       correction de position
// 4. Incrément du compteur de pas
//
// GARANTIES D'ORDRE :
// L'intégration précède toute détection de collision dans un tick. Dans la
// boucle du solveur, tous les AABB sont reconstruits avant le premier test
// de paire. Dans une même paire, toutes les impulsions de contact sont
// calculées avant d'être appliquées (voir gs_poly_solver).
//
// Le monde n'est pas thread-safe : tout accès se fait depuis le thread de
// simulation, le rendu lit les corps entre deux pas.
//
// =============================================================================

use crate::gs_poly_aabb::{aabb_intersection, get_aabb, Aabb};
use crate::gs_poly_collision::sat_collision;
use crate::gs_poly_solver::{positional_correction, resolve_collision};
use crate::gs_poly_spatial_hash::{build_pairs_from_aabbs, GridConfig};
use crate::gs_poly_transform::world_space;
use crate::gs_poly_types::RigidBody;
use crate::gs_poly_vec2::{vec2, Vec2};

// =============================================================================
// WorldStats - Compteurs de diagnostic
// =============================================================================
//
// Purement indicatif : rien dans la simulation ne dépend de ces compteurs.
//
// =============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct WorldStats {
    /// Corps intégrés depuis la création du monde
    pub bodies_updated: u64,

    /// Paires candidates testées en phase large (test AABB)
    pub broad_checks: u64,

    /// Tests SAT effectués en phase étroite
    pub narrow_checks: u64,

    /// Manifolds résolus (impulsions appliquées)
    pub contacts_resolved: u64,

    /// Pas de simulation effectués
    pub steps: u64,
}

// =============================================================================
// PhyWorld - Monde physique
// =============================================================================

pub struct PhyWorld {
    /// Tous les corps, statiques et dynamiques, possédés par le monde.
    /// Attention : un push peut réallouer, ne pas retenir de références
    /// entre deux appels susceptibles de faire grandir la collection.
    bodies: Vec<RigidBody>,

    /// Gravité appliquée à chaque intégration
    pub gravity: Vec2,

    /// Nombre de passes du solveur par pas
    pub solver_iterations: usize,

    /// Les corps sous y = -y_bounds sont éliminés
    pub y_bounds: f32,

    /// Configuration de la grille de la phase large
    pub grid: GridConfig,

    stats: WorldStats,
}

impl PhyWorld {
    /// Crée un monde avec la gravité terrestre et les réglages par défaut
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            gravity: vec2(0.0, -9.81),
            solver_iterations: 10,
            y_bounds: 100.0,
            grid: GridConfig::default(),
            stats: WorldStats::default(),
        }
    }

    // =========================================================================
    // Accès aux corps
    // =========================================================================

    /// Ajoute un corps et retourne son index
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Itération en lecture seule (rendu, inspection)
    #[inline]
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// Accès mutable à la collection, pour la mise en place de scène et
    /// l'insertion interactive entre deux pas
    #[inline]
    pub fn bodies_mut(&mut self) -> &mut Vec<RigidBody> {
        &mut self.bodies
    }

    #[inline]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Compteurs de diagnostic
    #[inline]
    pub fn stats(&self) -> &WorldStats {
        &self.stats
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Avance la simulation d'un pas de temps dt (secondes, > 0)
    pub fn step(&mut self, dt: f32) {
        self.integrate(dt);
        self.cull();

        for _ in 0..self.solver_iterations {
            self.solve_iteration();
        }

        // La dernière correction de position a pu salir des caches : on les
        // reconstruit pour que le rendu lise des sommets monde à jour
        for body in &mut self.bodies {
            world_space(body);
        }

        self.stats.steps += 1;
    }

    /// Intégration d'Euler semi-implicite des corps non statiques
    fn integrate(&mut self, dt: f32) {
        for body in &mut self.bodies {
            if body.is_static {
                continue;
            }

            // La gravité écrase l'accélération accumulée
            body.linear_acceleration = self.gravity;
            body.linear_velocity += body.linear_acceleration * dt;

            let delta = body.linear_velocity * dt;
            body.move_by(delta);
            body.rotate(body.angular_velocity * dt);

            body.force = Vec2::ZERO;
            self.stats.bodies_updated += 1;
        }
    }

    /// Élimine les corps tombés sous la borne basse du monde
    fn cull(&mut self) {
        let floor = -self.y_bounds;
        self.bodies.retain(|body| body.position.y >= floor);
    }

    /// Une passe du solveur : caches, AABB, phase large, phase étroite,
    /// résolution
    fn solve_iteration(&mut self) {
        // Tous les caches et AABB sont reconstruits avant le premier test
        // de paire : la correction de position de la passe précédente a pu
        // déplacer n'importe quel corps
        let mut aabbs: Vec<Aabb> = Vec::with_capacity(self.bodies.len());
        for body in &mut self.bodies {
            world_space(body);
            aabbs.push(get_aabb(body));
        }

        let pairs = build_pairs_from_aabbs(&aabbs, &self.grid);

        for (i, j) in pairs {
            // Deux corps statiques ne se résolvent jamais
            if self.bodies[i].is_static && self.bodies[j].is_static {
                continue;
            }

            self.stats.broad_checks += 1;
            if !aabb_intersection(&aabbs[i], &aabbs[j]) {
                continue;
            }

            // Emprunt scindé : i < j garanti par la phase large
            let (head, tail) = self.bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            // Une paire résolue plus tôt dans cette passe a pu salir l'un
            // des deux corps : le SAT lit toujours des caches propres
            world_space(a);
            world_space(b);

            self.stats.narrow_checks += 1;
            let manifold = sat_collision(a, b);
            if !manifold.in_collision {
                continue;
            }

            resolve_collision(a, b, &manifold);
            positional_correction(a, b, &manifold);
            self.stats.contacts_resolved += 1;
        }
    }
}

impl Default for PhyWorld {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests unitaires
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dynamic_diamond(x: f32, y: f32) -> RigidBody {
        let mut body = RigidBody::new_polygon(4, 1.0, 2.0);
        body.snap_to(vec2(x, y));
        body
    }

    #[test]
    fn test_defaults() {
        let world = PhyWorld::new();
        assert_eq!(world.gravity, vec2(0.0, -9.81));
        assert_eq!(world.solver_iterations, 10);
        assert_eq!(world.y_bounds, 100.0);
        assert_eq!(world.grid.cell_size, 2.0);
    }

    #[test]
    fn test_integration_under_gravity() {
        let mut world = PhyWorld::new();
        world.add_body(dynamic_diamond(0.0, 50.0));

        let dt = 1.0 / 120.0;
        world.step(dt);

        let body = &world.bodies()[0];
        // Euler semi-implicite : v = g·dt, y = 50 + v·dt
        assert!((body.linear_velocity.y + 9.81 * dt).abs() < 1e-4);
        assert!(body.position.y < 50.0);
        assert_eq!(world.stats().steps, 1);
        assert_eq!(world.stats().bodies_updated, 1);
    }

    #[test]
    fn test_static_bodies_never_move() {
        let mut world = PhyWorld::new();
        let mut floor = RigidBody::default();
        floor.set_box_vertices(10.0, 1.0);
        floor.set_static(true);
        floor.snap_to(vec2(0.0, 0.0));
        world.add_body(floor);

        for _ in 0..240 {
            world.step(1.0 / 120.0);
        }

        let body = &world.bodies()[0];
        assert_eq!(body.position, vec2(0.0, 0.0));
        assert_eq!(body.linear_velocity, Vec2::ZERO);
        assert_eq!(body.angular_velocity, 0.0);
    }

    #[test]
    fn test_cull_below_bounds() {
        let mut world = PhyWorld::new();
        world.add_body(dynamic_diamond(0.0, -150.0));
        world.add_body(dynamic_diamond(0.0, 10.0));

        world.step(1.0 / 120.0);
        assert_eq!(world.body_count(), 1);
        assert!((world.bodies()[0].position.y - 10.0).abs() < 1.0);
    }

    #[test]
    fn test_two_static_overlapping_skip() {
        // Deux boîtes statiques qui se chevauchent : le pas ne résout rien
        // et ne touche à rien
        let mut world = PhyWorld::new();
        for x in [0.0, 0.5] {
            let mut b = RigidBody::default();
            b.set_box_vertices(2.0, 2.0);
            b.set_static(true);
            b.snap_to(vec2(x, 0.0));
            world.add_body(b);
        }

        world.step(1.0 / 120.0);

        assert_eq!(world.stats().contacts_resolved, 0);
        assert_eq!(world.bodies()[0].position, vec2(0.0, 0.0));
        assert_eq!(world.bodies()[1].position, vec2(0.5, 0.0));
    }

    #[test]
    fn test_caches_current_after_step() {
        // Après un pas complet, tous les caches monde sont à jour :
        // le rendu peut lire transformed_vertices sans précaution
        let mut world = PhyWorld::new();
        world.add_body(dynamic_diamond(0.0, 5.0));
        world.add_body(dynamic_diamond(0.3, 7.0));

        world.step(1.0 / 120.0);

        for body in world.bodies() {
            assert!(!body.update);
            assert_eq!(body.transformed_vertices.len(), body.vertices.len());
        }
    }

    #[test]
    fn test_resolved_pair_counted() {
        let mut world = PhyWorld::new();
        world.gravity = Vec2::ZERO;
        world.add_body(dynamic_diamond(-0.5, 0.0));
        world.add_body(dynamic_diamond(0.5, 0.0));

        world.step(1.0 / 120.0);

        assert!(world.stats().broad_checks >= 1);
        assert!(world.stats().narrow_checks >= 1);
        assert!(world.stats().contacts_resolved >= 1);
    }
}
