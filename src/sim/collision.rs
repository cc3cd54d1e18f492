//! Directional collision resolution against static platforms
//!
//! There is no swept test: the side of contact is inferred from where the
//! body was *before* this tick's move, with velocity sign as the gate. Fast
//! bodies or thin platforms can tunnel.
//!
//! Platforms are resolved one after another in slice order, each seeing the
//! corrections made by the ones before it. That order is part of the
//! observable behaviour when a body overlaps several platforms at once.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::level::Platform;
use super::rect::Rect;
use crate::consts::CONTACT_EPSILON;

/// Which face of the body hit the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionSide {
    /// Body landed on the platform top
    Bottom,
    /// Body's head hit the platform underside
    Top,
    /// Body ran into the platform's left edge
    Right,
    /// Body ran into the platform's right edge
    Left,
}

/// A resolved contact: platform index plus side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub platform: usize,
    pub side: CollisionSide,
}

/// Resolve one overlapping platform.
///
/// The four branches are exclusive and tried in order bottom, top, right,
/// left; the first whose condition holds wins. Returns `None` when no branch
/// applies (e.g. the body started the tick already inside the platform).
pub fn resolve_platform(body: &mut KinematicBody, old: Vec2, platform: &Rect) -> Option<CollisionSide> {
    let (width, height) = (body.rect.width(), body.rect.height());
    let vel = body.velocity;

    if vel.y > 0.0 && old.y + height <= platform.top() {
        body.rect.set_bottom(platform.top());
        body.velocity.y = 0.0;
        body.on_ground = true;
        Some(CollisionSide::Bottom)
    } else if vel.y < 0.0 && old.y >= platform.bottom() {
        body.rect.set_top(platform.bottom());
        body.velocity.y = 0.0;
        Some(CollisionSide::Top)
    } else if vel.x > 0.0 && old.x + width <= platform.left() {
        body.rect.set_right(platform.left());
        body.velocity.x = 0.0;
        Some(CollisionSide::Right)
    } else if vel.x < 0.0 && old.x >= platform.right() {
        body.rect.set_left(platform.right());
        body.velocity.x = 0.0;
        Some(CollisionSide::Left)
    } else {
        None
    }
}

/// Resolve the body against every platform in order and recompute
/// `on_ground` from scratch.
pub fn resolve_platforms(body: &mut KinematicBody, old: Vec2, platforms: &[Platform]) -> Vec<Contact> {
    body.on_ground = false;
    let mut contacts = Vec::new();

    for (index, platform) in platforms.iter().enumerate() {
        if !body.rect.intersects(&platform.rect) {
            continue;
        }
        if let Some(side) = resolve_platform(body, old, &platform.rect) {
            contacts.push(Contact {
                platform: index,
                side,
            });
        }
    }

    if !body.on_ground && body.velocity.y == 0.0 {
        body.on_ground = platforms.iter().any(|p| is_resting_on(&body.rect, &p.rect));
    }

    contacts
}

/// Body bottom sits on the platform top and the two overlap horizontally
pub fn is_resting_on(body: &Rect, platform: &Rect) -> bool {
    (body.bottom() - platform.top()).abs() <= CONTACT_EPSILON && body.overlaps_horizontally(platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::animation::{AnimationClip, AnimationState};
    use crate::sim::body::AnimationSet;
    use proptest::prelude::*;

    fn body(x: f32, y: f32, w: f32, h: f32) -> KinematicBody {
        let anim = || AnimationState::new(AnimationClip::new(["f"], 0.1, true).unwrap());
        KinematicBody::new(
            Rect::new(x, y, w, h).unwrap(),
            AnimationSet {
                idle: anim(),
                run: anim(),
                jump: anim(),
            },
        )
    }

    fn platform(x: f32, y: f32, w: f32, h: f32) -> Platform {
        Platform::new(x, y, w, h).unwrap()
    }

    #[test]
    fn test_bottom_collision_snaps_to_top() {
        // 30x50 body that started at y=-6 and fell into a platform at y=50
        let mut b = body(0.0, 0.0, 30.0, 50.0);
        b.velocity.y = 6.0;
        b.rect.y = 3.0;
        let p = platform(0.0, 50.0, 200.0, 20.0);

        let contacts = resolve_platforms(&mut b, Vec2::new(0.0, -6.0), &[p]);

        assert_eq!(
            contacts,
            vec![Contact {
                platform: 0,
                side: CollisionSide::Bottom
            }]
        );
        assert_eq!(b.rect.y, 0.0);
        assert_eq!(b.velocity.y, 0.0);
        assert!(b.on_ground);
    }

    #[test]
    fn test_top_collision_stops_rise() {
        let mut b = body(10.0, 65.0, 30.0, 50.0);
        b.velocity.y = -12.0;
        let p = platform(0.0, 50.0, 200.0, 20.0);

        let side = resolve_platform(&mut b, Vec2::new(10.0, 77.0), &p.rect);

        assert_eq!(side, Some(CollisionSide::Top));
        assert_eq!(b.rect.top(), 70.0);
        assert_eq!(b.velocity.y, 0.0);
        assert!(!b.on_ground);
    }

    #[test]
    fn test_right_collision_stops_at_left_edge() {
        let mut b = body(73.0, 0.0, 30.0, 50.0);
        b.velocity.x = 5.0;
        let wall = platform(100.0, -100.0, 20.0, 300.0);

        let contacts = resolve_platforms(&mut b, Vec2::new(68.0, 0.0), &[wall]);

        assert_eq!(contacts[0].side, CollisionSide::Right);
        assert_eq!(b.rect.right(), 100.0);
        assert_eq!(b.velocity.x, 0.0);
    }

    #[test]
    fn test_left_collision_stops_at_right_edge() {
        let mut b = body(117.0, 0.0, 30.0, 50.0);
        b.velocity.x = -5.0;
        let wall = platform(100.0, -100.0, 20.0, 300.0);

        let contacts = resolve_platforms(&mut b, Vec2::new(122.0, 0.0), &[wall]);

        assert_eq!(contacts[0].side, CollisionSide::Left);
        assert_eq!(b.rect.left(), 120.0);
        assert_eq!(b.velocity.x, 0.0);
    }

    #[test]
    fn test_bottom_wins_over_side_on_corner() {
        // Diagonal move into a corner: both bottom and right conditions hold
        let mut b = body(75.0, 5.0, 30.0, 50.0);
        b.velocity = Vec2::new(5.0, 5.0);
        let p = platform(100.0, 50.0, 100.0, 20.0);

        let side = resolve_platform(&mut b, Vec2::new(70.0, 0.0), &p.rect);

        assert_eq!(side, Some(CollisionSide::Bottom));
        assert_eq!(b.rect.bottom(), 50.0);
        assert_eq!(b.velocity.x, 5.0);
    }

    #[test]
    fn test_no_branch_when_already_inside() {
        let mut b = body(50.0, 40.0, 30.0, 50.0);
        b.velocity = Vec2::new(0.0, 1.0);
        let p = platform(0.0, 50.0, 200.0, 20.0);

        let contacts = resolve_platforms(&mut b, Vec2::new(50.0, 39.0), &[p]);

        assert!(contacts.is_empty());
        assert_eq!(b.rect.y, 40.0);
        assert!(!b.on_ground);
    }

    #[test]
    fn test_touching_edges_do_not_resolve() {
        let mut b = body(0.0, 0.0, 30.0, 50.0);
        b.velocity.x = 5.0;
        let beside = platform(30.0, 0.0, 20.0, 50.0);

        let contacts = resolve_platforms(&mut b, Vec2::new(-5.0, 0.0), &[beside]);
        assert!(contacts.is_empty());
        assert_eq!(b.velocity.x, 5.0);
    }

    #[test]
    fn test_platform_order_changes_outcome() {
        // A floor and a raised block both overlapped after one diagonal step
        let floor = platform(0.0, 50.0, 200.0, 20.0);
        let block = platform(32.0, 46.0, 20.0, 100.0);
        let old = Vec2::new(0.0, -6.0);

        let mut a = body(5.0, 3.0, 30.0, 50.0);
        a.velocity = Vec2::new(5.0, 9.0);
        let contacts_a = resolve_platforms(&mut a, old, &[floor, block]);

        let mut b = body(5.0, 3.0, 30.0, 50.0);
        b.velocity = Vec2::new(5.0, 9.0);
        let contacts_b = resolve_platforms(&mut b, old, &[block, floor]);

        // Floor first: lands at y=0, then the block still overlaps and
        // stops the body at its left edge.
        assert_eq!(
            contacts_a,
            vec![
                Contact {
                    platform: 0,
                    side: CollisionSide::Bottom
                },
                Contact {
                    platform: 1,
                    side: CollisionSide::Right
                },
            ]
        );
        assert_eq!(a.rect.y, 0.0);
        assert_eq!(a.rect.right(), 32.0);
        assert_eq!(a.velocity.x, 0.0);
        assert!(a.on_ground);

        // Block first: lands on the block, which lifts it clear of the floor
        assert_eq!(
            contacts_b,
            vec![Contact {
                platform: 0,
                side: CollisionSide::Bottom
            }]
        );
        assert_eq!(b.rect.bottom(), 46.0);
        assert_eq!(b.velocity.x, 5.0);
        assert!(b.on_ground);
    }

    #[test]
    fn test_resting_probe() {
        let p = platform(0.0, 50.0, 200.0, 20.0);
        let on_top = Rect::new(10.0, 0.0, 30.0, 50.0).unwrap();
        let hanging_off = Rect::new(200.0, 0.0, 30.0, 50.0).unwrap();
        let hovering = Rect::new(10.0, -1.0, 30.0, 50.0).unwrap();

        assert!(is_resting_on(&on_top, &p.rect));
        assert!(!is_resting_on(&hanging_off, &p.rect));
        assert!(!is_resting_on(&hovering, &p.rect));
    }

    #[test]
    fn test_resting_probe_skipped_while_rising() {
        let mut b = body(10.0, 0.0, 30.0, 50.0);
        b.velocity.y = -12.0;
        let p = platform(0.0, 50.0, 200.0, 20.0);

        resolve_platforms(&mut b, Vec2::new(10.0, 12.0), &[p]);
        assert!(!b.on_ground);
    }

    proptest! {
        #[test]
        fn prop_falling_body_lands_flush(
            px in -500.0f32..500.0,
            py in -500.0f32..500.0,
            pw in 40.0f32..400.0,
            ph in 5.0f32..60.0,
            clearance in 0.01f32..20.0,
            vy in 1.0f32..20.0,
        ) {
            let p = platform(px, py, pw, ph);
            let old_y = py - 50.0 - clearance;
            let new_y = old_y + clearance + vy.min(ph) * 0.5 + 0.01;
            let mut b = body(px + 1.0, new_y, 30.0, 50.0);
            b.velocity.y = vy;

            resolve_platforms(&mut b, Vec2::new(px + 1.0, old_y), &[p]);

            prop_assert!((b.rect.bottom() - p.rect.top()).abs() < 1e-3);
            prop_assert_eq!(b.velocity.y, 0.0);
            prop_assert!(b.on_ground);
        }

        #[test]
        fn prop_moving_right_stops_flush(
            px in -500.0f32..500.0,
            gap in 0.01f32..10.0,
            vx in 0.5f32..15.0,
        ) {
            let wall = platform(px, -100.0, 20.0, 300.0);
            let old_x = px - 30.0 - gap;
            let new_x = old_x + gap + vx.min(20.0) * 0.5 + 0.01;
            let mut b = body(new_x, 0.0, 30.0, 50.0);
            b.velocity.x = vx;

            resolve_platforms(&mut b, Vec2::new(old_x, 0.0), &[wall]);

            prop_assert!((b.rect.right() - wall.rect.left()).abs() < 1e-3);
            prop_assert_eq!(b.velocity.x, 0.0);
        }
    }
}
