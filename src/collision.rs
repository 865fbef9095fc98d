//! Collision detection
//!
//! AABB (Axis-Aligned Bounding Box) detection for the bird against the pipe
//! list, plus the screen-bound test that kills the bird at the ceiling or
//! floor. All functions here are pure; the state machine decides what a
//! collision means.

use sdl2::rect::Rect;

/// Entities that expose an axis-aligned bounding box for collision checks.
///
/// The returned `Rect` must match the entity exactly as rendered; the
/// simulation and the screen share one coordinate space.
pub trait Collidable {
    fn bounds(&self) -> Rect;
}

impl Collidable for crate::pipe::Pipe {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Checks if two axis-aligned bounding boxes overlap.
///
/// Edge-touching rectangles do NOT intersect: the upper bounds are
/// exclusive, so a bird exactly flush with a pipe face survives.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns the index of the first entity the given one overlaps, if any.
///
/// One hit is enough to end a life, so the search stops at the first
/// overlap instead of collecting every collision.
pub fn first_collision<T: Collidable>(entity: &impl Collidable, others: &[T]) -> Option<usize> {
    let entity_bounds = entity.bounds();
    others
        .iter()
        .position(|other| aabb_intersect(&entity_bounds, &other.bounds()))
}

/// Screen-bound test: the ceiling and floor are deadly on contact.
///
/// Unlike [`aabb_intersect`] this is edge-INCLUSIVE: touching the bound
/// (`top <= 0` or `bottom >= screen_height`) already counts.
pub fn hits_screen_bounds(bounds: &Rect, screen_height: u32) -> bool {
    bounds.y() <= 0 || bounds.y() + bounds.height() as i32 >= screen_height as i32
}
