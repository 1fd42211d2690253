//! Built-in default settings
//!
//! Consulted for typed reads issued without an explicit default, after the
//! world and global layers.

pub const DEFAULT_CONFIG: &str = r#"
checks:
  fight:
    debug: false
    angle:
      active: true
      threshold: 50
      actions: "cancel vl>100 log:angle:3:5:f cancel vl>250 log:angle:0:5:cif cancel"
    toolchangepenalty: 500
    critical:
      active: true
      falldistance: 0.01
      actions: "cancel vl>50 log:critical:0:5:cif cancel"
    direction:
      active: true
      strict: false
      penalty: 500
      actions: "cancel vl>5 log:fdirection:3:5:f cancel vl>20 log:fdirection:0:5:if cancel vl>50 log:fdirection:0:5:cif cancel"
    fastheal:
      active: true
      interval: 4000
      buffer: 1000
      actions: "cancel vl>10 cancel log:fastheal:0:10:i vl>30 cancel log:fastheal:0:10:if"
    godmode:
      active: true
      lagminage: 1100
      lagmaxage: 5000
      actions: "log:godmode:2:5:if cancel"
    noswing:
      active: true
      actions: "cancel vl>10 log:noswing:0:5:if cancel"
    reach:
      active: true
      survivaldistance: 4.4
      penalty: 500
      precision: true
      reduce: true
      reducedistance: 0.9
      reducestep: 0.15
      actions: "cancel vl>10 log:freach:2:5:if cancel"
    selfhit:
      active: true
      actions: "log:fselfhit:0:5:if cancel vl>10 log:fselfhit:0:5:icf cancel"
    speed:
      active: true
      limit: 15
      buckets:
        number: 6
        duration: 333
        factor: 1.0
      shortterm:
        limit: 6
        ticks: 7
      actions: "log:fspeed:0:5:if cancel"
    yawrate:
      active: true
    canceldead: true
"#;

// vim: ts=4
