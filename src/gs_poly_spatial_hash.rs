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
// gs_poly_spatial_hash.rs - Spatial hash (phase large)
// =============================================================================
//
// PROBLÈME RÉSOLU :
// -----------------
// Détecter les collisions entre N corps demande normalement de comparer
// chaque paire, soit O(n²) comparaisons. Avec quelques centaines de corps
// à 120 Hz, c'est déjà trop.
//
// SOLUTION : GRILLE UNIFORME HACHÉE
// ---------------------------------
// L'espace est découpé en cellules carrées de taille fixe. Chaque corps est
// inséré dans toutes les cellules couvertes par son AABB. Seuls les corps
// partageant une cellule deviennent des paires candidates.
//
//   +---+---+---+---+---+
//   |   | ● |   |   |   |  Chaque cellule occupée contient la liste
//   +---+---+---+---+---+  des indices de corps présents.
//   |   |   | ● | ● |   |
//   +---+---+---+---+---+  Un corps chevauchant une frontière est
//   | ● |   |   |   | ● |  inséré dans plusieurs cellules.
//   +---+---+---+---+---+
//
// Contrairement à une grille bornée, la grille est un HashMap clé par
// coordonnées entières de cellule : les coordonnées négatives et les mondes
// non bornés sont gérés sans décalage.
//
// Complexité : O(n + k) dans les scènes bien séparées, k = paires émises.
//
// =============================================================================

use std::collections::{HashMap, HashSet};

use crate::gs_poly_aabb::Aabb;

// =============================================================================
// GridConfig - Paramètres de la grille
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    /// Taille d'une cellule, en unités du monde.
    /// À régler sur le diamètre typique d'un corps : à 2.0, deux corps à
    /// moins d'une cellule l'un de l'autre deviennent candidats.
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: 2.0 }
    }
}

// =============================================================================
// Clés 64 bits
// =============================================================================

/// Empaquette des coordonnées de cellule 2D en une clé 64 bits
#[inline]
pub fn cell_key(cx: i32, cy: i32) -> u64 {
    ((cx as u32 as u64) << 32) | (cy as u32 as u64)
}

/// Empaquette une paire d'indices de corps en une clé unique,
/// indépendante de l'ordre
#[inline]
pub fn pair_key(a: usize, b: usize) -> u64 {
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    ((a as u32 as u64) << 32) | (b as u32 as u64)
}

/// Coordonnée de cellule d'une abscisse monde
#[inline]
pub fn cell_coord(x: f32, cell_size: f32) -> i32 {
    (x / cell_size).floor() as i32
}

// =============================================================================
// Construction des paires candidates
// =============================================================================

/// Construit les paires candidates (i, j), i < j, depuis les AABB des corps.
/// Chaque paire partageant au moins une cellule est émise exactement une
/// fois, dédupliquée par clé de paire.
pub fn build_pairs_from_aabbs(aabbs: &[Aabb], cfg: &GridConfig) -> Vec<(usize, usize)> {
    let mut buckets: HashMap<u64, Vec<usize>> = HashMap::with_capacity(aabbs.len() * 2);

    // Insère chaque indice dans toutes les cellules couvertes par son AABB
    for (i, bb) in aabbs.iter().enumerate() {
        let x0 = cell_coord(bb.min.x, cfg.cell_size);
        let x1 = cell_coord(bb.max.x, cfg.cell_size);
        let y0 = cell_coord(bb.min.y, cfg.cell_size);
        let y1 = cell_coord(bb.max.y, cfg.cell_size);

        for cy in y0..=y1 {
            for cx in x0..=x1 {
                buckets.entry(cell_key(cx, cy)).or_default().push(i);
            }
        }
    }

    // Émet toutes les paires non ordonnées de chaque cellule occupée,
    // première occurrence seulement
    let mut seen: HashSet<u64> = HashSet::with_capacity(aabbs.len() * 8);
    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(aabbs.len() * 4);

    for ids in buckets.values() {
        if ids.len() < 2 {
            continue;
        }

        for a in 0..ids.len() {
            for b in (a + 1)..ids.len() {
                let (i, j) = if ids[a] < ids[b] {
                    (ids[a], ids[b])
                } else {
                    (ids[b], ids[a])
                };

                if seen.insert(pair_key(i, j)) {
                    pairs.push((i, j));
                }
            }
        }
    }

    pairs
}

// =============================================================================
// Tests unitaires
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gs_poly_vec2::Vec2;

    fn aabb_at(x: f32, y: f32, half: f32) -> Aabb {
        Aabb {
            min: Vec2::new(x - half, y - half),
            max: Vec2::new(x + half, y + half),
        }
    }

    #[test]
    fn test_cell_coord_negative() {
        // floor, pas troncature : -0.5 / 2.0 tombe dans la cellule -1
        assert_eq!(cell_coord(-0.5, 2.0), -1);
        assert_eq!(cell_coord(0.5, 2.0), 0);
        assert_eq!(cell_coord(-2.0, 2.0), -1);
        assert_eq!(cell_coord(-2.1, 2.0), -2);
    }

    #[test]
    fn test_pair_key_order_independent() {
        assert_eq!(pair_key(3, 7), pair_key(7, 3));
        assert_ne!(pair_key(3, 7), pair_key(3, 8));
    }

    #[test]
    fn test_overlapping_pair_emitted_once() {
        // Deux AABB qui couvrent plusieurs cellules communes : une seule paire
        let cfg = GridConfig { cell_size: 2.0 };
        let aabbs = vec![aabb_at(0.0, 0.0, 3.0), aabb_at(1.0, 1.0, 3.0)];

        let pairs = build_pairs_from_aabbs(&aabbs, &cfg);
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn test_distant_bodies_no_pair() {
        let cfg = GridConfig::default();
        let aabbs = vec![aabb_at(0.0, 0.0, 0.5), aabb_at(50.0, 0.0, 0.5)];
        assert!(build_pairs_from_aabbs(&aabbs, &cfg).is_empty());
    }

    #[test]
    fn test_negative_coordinates() {
        // Des corps autour de l'origine et en coordonnées négatives
        let cfg = GridConfig::default();
        let aabbs = vec![aabb_at(-10.0, -10.0, 0.6), aabb_at(-10.5, -10.5, 0.6)];
        let pairs = build_pairs_from_aabbs(&aabbs, &cfg);
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn test_linear_chain_is_linear_not_quadratic() {
        // 50 corps espacés de 2.0 : seules les paires voisines partagent
        // une cellule, la liste reste en O(n)
        let cfg = GridConfig { cell_size: 2.0 };
        let n = 50;
        let aabbs: Vec<Aabb> = (0..n)
            .map(|i| aabb_at(i as f32 * 2.0, 0.0, 0.5))
            .collect();

        let mut pairs = build_pairs_from_aabbs(&aabbs, &cfg);
        pairs.sort_unstable();

        assert!(pairs.len() <= 2 * n, "attendu O(n), obtenu {}", pairs.len());

        // Complétude : chaque paire voisine (AABB à 1.0 l'un de l'autre,
        // même cellule) est présente exactement une fois
        for i in 0..n - 1 {
            let count = pairs.iter().filter(|&&p| p == (i, i + 1)).count();
            assert_eq!(count, 1, "paire ({}, {}) émise {} fois", i, i + 1, count);
        }
    }

    #[test]
    fn test_pairs_are_ordered() {
        let cfg = GridConfig::default();
        let aabbs = vec![
            aabb_at(0.0, 0.0, 1.0),
            aabb_at(0.5, 0.0, 1.0),
            aabb_at(1.0, 0.0, 1.0),
        ];
        for (i, j) in build_pairs_from_aabbs(&aabbs, &cfg) {
            assert!(i < j);
        }
    }
}
