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
// gs_poly2d_demo.rs - Interactive physics engine demonstration
// =============================================================================
//
// Démo interactive du moteur : un sol statique, un plan incliné et des
// polygones réguliers lâchés sous gravité.
//
// CONTRÔLES :
// -----------
// [Clic gauche] : Lâcher un polygone aléatoire au curseur
// [1] ou [P]    : Lâcher 10 polygones aléatoires
// [C]           : Réinitialiser la scène
// [Escape]      : Quitter
//
// Le monde est en mètres, axe y vers le haut ; l'écran est en pixels, axe y
// vers le bas. Toutes les conversions passent par world_to_screen.
//
// =============================================================================

// On utilise la bibliothèque qu'on vient de créer
use gs_poly2d::{color_to_rgba, colors, velocity_to_color, PhyWorld, RigidBody};
use gs_poly2d::gs_poly_vec2::Vec2 as PVec2;

// macroquad pour le rendu et les entrées
use macroquad::prelude::*;

// rand pour les spawns aléatoires
use ::rand::Rng;

// =============================================================================
// Configuration de la fenêtre
// =============================================================================

fn window_conf() -> Conf {
    Conf {
        window_title: "GS.Poly2D Demo - Portage Rust".to_owned(),
        window_width: 1024,
        window_height: 768,
        window_resizable: true,
        ..Default::default()
    }
}

// =============================================================================
// Constantes
// =============================================================================

/// Pas de temps fixe de la simulation (120 Hz)
const DT: f32 = 1.0 / 120.0;

/// Pixels par mètre
const SCALE: f32 = 24.0;

/// Centre de la caméra, en unités monde
const CAMERA_X: f32 = 0.0;
const CAMERA_Y: f32 = -4.0;

const POLY_SIDES_MIN: u32 = 3;
const POLY_SIDES_MAX: u32 = 8;
const POLY_RADIUS_MIN: f32 = 0.5;
const POLY_RADIUS_MAX: f32 = 1.2;
const POLY_MASS: f32 = 2.0;
const MAX_SPEED: f32 = 15.0; // Pour le gradient de couleur

// =============================================================================
// Conversion monde <-> écran
// =============================================================================

fn world_to_screen(p: PVec2) -> (f32, f32) {
    (
        screen_width() / 2.0 + (p.x - CAMERA_X) * SCALE,
        screen_height() / 2.0 - (p.y - CAMERA_Y) * SCALE,
    )
}

fn screen_to_world(sx: f32, sy: f32) -> PVec2 {
    PVec2::new(
        (sx - screen_width() / 2.0) / SCALE + CAMERA_X,
        -(sy - screen_height() / 2.0) / SCALE + CAMERA_Y,
    )
}

// =============================================================================
// Mise en place de la scène
// =============================================================================

/// Scène de départ : un sol, un plan incliné, quelques polygones
fn setup_scene(world: &mut PhyWorld) {
    world.bodies_mut().clear();

    // Sol statique
    let mut floor = RigidBody::default();
    floor.set_box_vertices(30.0, 2.0);
    floor.snap_to(PVec2::new(0.0, -12.0));
    floor.restitution = 0.6;
    floor.colour = colors::GRAY;
    floor.set_static(true);
    world.add_body(floor);

    // Plan incliné statique
    let mut ramp = RigidBody::default();
    ramp.set_box_vertices(10.0, 0.6);
    ramp.snap_to(PVec2::new(-6.0, -5.0));
    ramp.rotate(0.2 * std::f32::consts::FRAC_PI_2);
    ramp.restitution = 0.2;
    ramp.colour = colors::DARK_GRAY;
    ramp.set_static(true);
    world.add_body(ramp);

    // Quelques polygones de départ
    let mut rng = ::rand::thread_rng();
    for i in 0..6 {
        let sides = rng.gen_range(POLY_SIDES_MIN..=POLY_SIDES_MAX);
        let mut body = RigidBody::new_polygon(sides, rng.gen_range(0.6..1.0), POLY_MASS);
        body.snap_to(PVec2::new(-6.0 + 2.4 * i as f32, 4.0 + (i % 3) as f32 * 2.0));
        body.rotate(rng.gen_range(0.0..std::f32::consts::PI));
        body.restitution = rng.gen_range(0.1..0.7);
        world.add_body(body);
    }
}

/// Lâche un polygone aléatoire à une position monde donnée
fn spawn_polygon_at(world: &mut PhyWorld, pos: PVec2) {
    let mut rng = ::rand::thread_rng();

    let sides = rng.gen_range(POLY_SIDES_MIN..=POLY_SIDES_MAX);
    let radius = rng.gen_range(POLY_RADIUS_MIN..POLY_RADIUS_MAX);

    let mut body = RigidBody::new_polygon(sides, radius, POLY_MASS);
    body.snap_to(pos);
    body.rotate(rng.gen_range(0.0..std::f32::consts::PI));
    body.restitution = rng.gen_range(0.1..0.7);
    body.angular_velocity = rng.gen_range(-2.0..2.0);
    world.add_body(body);
}

/// Lâche une pluie de polygones au-dessus de la scène
fn spawn_polygons(world: &mut PhyWorld, count: usize) {
    let mut rng = ::rand::thread_rng();
    for _ in 0..count {
        let x = rng.gen_range(-10.0..10.0);
        let y = rng.gen_range(4.0..12.0);
        spawn_polygon_at(world, PVec2::new(x, y));
    }
}

// =============================================================================
// Fonctions de rendu
// =============================================================================

/// Convertit une couleur PhyColor en Color macroquad
fn phy_to_mq(color: u32) -> Color {
    let (r, g, b, a) = color_to_rgba(color);
    Color::new(r, g, b, a)
}

/// Dessine un corps depuis ses sommets monde (éventail de triangles,
/// valide pour un polygone convexe)
fn draw_body(body: &RigidBody, color: Color) {
    let verts = &body.transformed_vertices;
    if verts.len() < 3 {
        return;
    }

    let (x0, y0) = world_to_screen(verts[0]);
    for i in 1..verts.len() - 1 {
        let (x1, y1) = world_to_screen(verts[i]);
        let (x2, y2) = world_to_screen(verts[i + 1]);
        draw_triangle(
            vec2(x0, y0),
            vec2(x1, y1),
            vec2(x2, y2),
            color,
        );
    }

    // Contour
    for i in 0..verts.len() {
        let (x1, y1) = world_to_screen(verts[i]);
        let (x2, y2) = world_to_screen(verts[(i + 1) % verts.len()]);
        draw_line(x1, y1, x2, y2, 1.0, phy_to_mq(colors::BLACK));
    }
}

/// Dessine tout le monde physique
fn render_world(world: &PhyWorld) {
    for body in world.bodies() {
        let color = if body.is_static {
            // Les statiques gardent leur couleur propre
            phy_to_mq(body.colour)
        } else {
            // Les dynamiques sont teintés par leur vitesse
            phy_to_mq(velocity_to_color(body.linear_velocity, MAX_SPEED))
        };
        draw_body(body, color);
    }
}

/// Dessine l'interface utilisateur
fn render_ui(world: &PhyWorld, fps: i32) {
    let text_color = phy_to_mq(colors::YELLOW);
    let font_size = 18.0;
    let mut y = 20.0;
    let line_height = 22.0;

    draw_text(
        &format!("GS.Poly2D Demo | FPS: {}", fps),
        10.0, y, font_size, text_color,
    );
    y += line_height;

    draw_text(
        &format!("Corps: {}", world.body_count()),
        10.0, y, font_size, text_color,
    );
    y += line_height;

    let stats = world.stats();
    draw_text(
        &format!(
            "Pas: {} | Broad: {} | Narrow: {} | Contacts: {}",
            stats.steps, stats.broad_checks, stats.narrow_checks, stats.contacts_resolved
        ),
        10.0, y, font_size, text_color,
    );
    y += line_height;

    draw_text(
        "[Clic] Polygone au curseur | [1/P] Pluie de polygones | [C] Reset | [Esc] Quit",
        10.0, y, font_size, text_color,
    );
}

// =============================================================================
// Point d'entrée
// =============================================================================

#[macroquad::main(window_conf)]
async fn main() {
    // =========================================================================
    // INITIALISATION
    // =========================================================================

    let mut world = PhyWorld::new();
    setup_scene(&mut world);

    // Variables pour le calcul du FPS
    let mut frame_count = 0;
    let mut last_fps_update = get_time();
    let mut fps = 0;

    // =========================================================================
    // BOUCLE PRINCIPALE
    // =========================================================================

    loop {
        // =====================================================================
        // GESTION DES ENTRÉES
        // =====================================================================

        // Insertion interactive au curseur
        if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            spawn_polygon_at(&mut world, screen_to_world(mx, my));
        }

        // Pluie de polygones
        if is_key_pressed(KeyCode::Key1) || is_key_pressed(KeyCode::P) {
            spawn_polygons(&mut world, 10);
        }

        // Réinitialiser
        if is_key_pressed(KeyCode::C) {
            setup_scene(&mut world);
        }

        // Quitter
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // =====================================================================
        // SIMULATION
        // =====================================================================

        world.step(DT);

        // =====================================================================
        // CALCUL DU FPS
        // =====================================================================

        frame_count += 1;
        let now = get_time();
        if now - last_fps_update >= 0.5 {
            fps = (frame_count as f64 / (now - last_fps_update)) as i32;
            frame_count = 0;
            last_fps_update = now;
        }

        // =====================================================================
        // RENDU
        // =====================================================================

        clear_background(WHITE);
        render_world(&world);
        render_ui(&world, fps);

        // =====================================================================
        // FRAME SUIVANTE
        // =====================================================================

        next_frame().await;
    }
}
