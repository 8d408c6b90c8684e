//! The player's ship

use std::collections::BTreeMap;

use glam::Vec2;

use super::entity::{Body, Entity, EntityId};
use super::projectile::Projectile;
use crate::settings::Settings;
use crate::{heading_to_vec, normalize_angle, wrap_coordinate};

/// Input snapshot supplied by the host each frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipInput {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub shoot: bool,
}

/// The player-controlled ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub body: Body,
    /// Radians; forward is (cos, sin) with screen y pointing down
    pub heading: f32,
    pub shot_charged: bool,
    pub wants_to_shoot: bool,
    /// Seconds until the next shot is charged
    pub recharge_timer: f32,
    /// Thrust was held during the last update (for drawing the flame)
    pub thrusting: bool,
}

impl Ship {
    /// New ship at rest, pointing up, shot ready
    pub fn new(id: EntityId, pos: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(id, pos, Vec2::ZERO, radius),
            heading: -std::f32::consts::FRAC_PI_2,
            shot_charged: true,
            wants_to_shoot: false,
            recharge_timer: 0.0,
            thrusting: false,
        }
    }

    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading_to_vec(self.heading)
    }

    /// Tip of the hull, where projectiles leave
    #[inline]
    pub fn nose(&self) -> Vec2 {
        self.body.pos + self.forward() * self.body.radius()
    }

    /// Triangle vertices (nose, left wing, right wing) for drawing
    pub fn hull(&self) -> [Vec2; 3] {
        let r = self.body.radius();
        let wing = 2.5; // radians off the heading
        [
            self.nose(),
            self.body.pos + heading_to_vec(self.heading - wing) * r,
            self.body.pos + heading_to_vec(self.heading + wing) * r,
        ]
    }

    #[inline]
    pub fn is_shot_charged(&self) -> bool {
        self.shot_charged
    }

    /// Apply input, integrate, wrap around the playfield and recharge
    pub fn update(&mut self, dt: f32, input: &ShipInput, settings: &Settings) {
        let mut turn = 0.0;
        if input.rotate_left {
            turn -= 1.0;
        }
        if input.rotate_right {
            turn += 1.0;
        }
        self.heading = normalize_angle(self.heading + turn * settings.ship_rotation_speed * dt);

        self.thrusting = input.thrust;
        if input.thrust {
            self.body.vel += self.forward() * settings.ship_thrust * dt;
        }
        self.body.vel *= (1.0 - settings.ship_drag * dt).max(0.0);
        self.body.vel = self.body.vel.clamp_length_max(settings.ship_max_speed);

        self.body.integrate(dt);
        self.body.pos.x = wrap_coordinate(self.body.pos.x, settings.playfield_width);
        self.body.pos.y = wrap_coordinate(self.body.pos.y, settings.playfield_height);

        if !self.shot_charged {
            self.recharge_timer -= dt;
            if self.recharge_timer <= 0.0 {
                self.recharge_timer = 0.0;
                self.shot_charged = true;
            }
        }

        self.wants_to_shoot = input.shoot;
    }

    /// Fire from the nose into `projectiles` and start recharging
    ///
    /// Panics if the shot is not charged.
    pub fn shoot(
        &mut self,
        id: EntityId,
        projectiles: &mut BTreeMap<EntityId, Projectile>,
        settings: &Settings,
    ) {
        assert!(self.shot_charged, "ship fired without a charged shot");

        let vel = self.body.vel + self.forward() * settings.projectile_speed;
        let projectile = Projectile::new(
            id,
            self.nose(),
            vel,
            settings.projectile_radius,
            settings.projectile_ttl,
        );
        projectiles.insert(id, projectile);

        self.shot_charged = false;
        self.recharge_timer = settings.shot_cooldown;
    }
}

impl Entity for Ship {
    fn body(&self) -> &Body {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn centered_ship(settings: &Settings) -> Ship {
        Ship::new(EntityId(1), settings.playfield() / 2.0, settings.ship_radius)
    }

    #[test]
    fn test_new_ship_points_up() {
        let settings = Settings::default();
        let ship = centered_ship(&settings);
        assert!(ship.forward().y < -0.99);
        assert!(ship.nose().y < ship.body.pos.y);
        assert!(ship.is_shot_charged());
    }

    #[test]
    fn test_thrust_accelerates_along_heading() {
        let settings = Settings::default();
        let mut ship = centered_ship(&settings);
        let input = ShipInput {
            thrust: true,
            ..Default::default()
        };
        for _ in 0..30 {
            ship.update(SIM_DT, &input, &settings);
        }
        assert!(ship.body.vel.y < 0.0);
        assert!(ship.body.vel.x.abs() < 1e-3);
        assert!(ship.body.pos.y < settings.playfield_height / 2.0);
        assert!(ship.thrusting);
    }

    #[test]
    fn test_rotation_direction() {
        let settings = Settings::default();
        let mut ship = centered_ship(&settings);
        let start = ship.heading;
        let input = ShipInput {
            rotate_right: true,
            ..Default::default()
        };
        ship.update(SIM_DT, &input, &settings);
        assert!(ship.heading > start);

        // Both held cancels out
        let both = ShipInput {
            rotate_left: true,
            rotate_right: true,
            ..Default::default()
        };
        let before = ship.heading;
        ship.update(SIM_DT, &both, &settings);
        assert!((ship.heading - before).abs() < 1e-6);
    }

    #[test]
    fn test_speed_is_clamped() {
        let settings = Settings::default();
        let mut ship = centered_ship(&settings);
        ship.body.vel = Vec2::new(10_000.0, 0.0);
        ship.update(SIM_DT, &ShipInput::default(), &settings);
        assert!(ship.body.vel.length() <= settings.ship_max_speed + 1e-3);
    }

    #[test]
    fn test_ship_wraps_around_playfield() {
        let settings = Settings::default();
        let mut ship = centered_ship(&settings);
        ship.body.pos = Vec2::new(settings.playfield_width - 1.0, 5.0);
        ship.body.vel = Vec2::new(120.0, -600.0);
        ship.update(0.1, &ShipInput::default(), &settings);
        assert!(ship.body.pos.x >= 0.0 && ship.body.pos.x < 50.0);
        assert!(ship.body.pos.y > settings.playfield_height - 100.0);
    }

    #[test]
    fn test_shoot_inserts_projectile_and_resets_charge() {
        let settings = Settings::default();
        let mut ship = centered_ship(&settings);
        ship.body.vel = Vec2::new(30.0, 0.0);
        let mut projectiles = BTreeMap::new();

        ship.shoot(EntityId(2), &mut projectiles, &settings);

        assert!(!ship.is_shot_charged());
        let p = &projectiles[&EntityId(2)];
        assert_eq!(p.body.pos, ship.nose());
        let expected = ship.body.vel + ship.forward() * settings.projectile_speed;
        assert!((p.body.vel - expected).length() < 1e-3);
        assert_eq!(p.time_to_live, settings.projectile_ttl);
    }

    #[test]
    fn test_recharge_after_cooldown() {
        let settings = Settings::default();
        let mut ship = centered_ship(&settings);
        let mut projectiles = BTreeMap::new();
        ship.shoot(EntityId(2), &mut projectiles, &settings);

        ship.update(settings.shot_cooldown / 2.0, &ShipInput::default(), &settings);
        assert!(!ship.is_shot_charged());
        ship.update(settings.shot_cooldown, &ShipInput::default(), &settings);
        assert!(ship.is_shot_charged());
    }

    #[test]
    #[should_panic(expected = "without a charged shot")]
    fn test_shoot_uncharged_panics() {
        let settings = Settings::default();
        let mut ship = centered_ship(&settings);
        let mut projectiles = BTreeMap::new();
        ship.shoot(EntityId(2), &mut projectiles, &settings);
        ship.shoot(EntityId(3), &mut projectiles, &settings);
    }

    #[test]
    fn test_hull_nose_first() {
        let settings = Settings::default();
        let ship = centered_ship(&settings);
        let hull = ship.hull();
        assert_eq!(hull[0], ship.nose());
        // Wings trail behind the centre
        assert!(hull[1].y > ship.body.pos.y);
        assert!(hull[2].y > ship.body.pos.y);
    }
}
