/// ASCII portraits for the battle screen, keyed by `Monster::sprite`.
pub struct MonsterSprite {
    pub art: &'static str,
}

impl MonsterSprite {
    pub const fn new(art: &'static str) -> Self {
        Self { art }
    }

    pub fn height(&self) -> u16 {
        self.art.lines().count() as u16
    }
}

pub const SPRITE_TENTACLE_MAGE: MonsterSprite = MonsterSprite::new(
    r"    ╱▔▔▔╲
   │ ◉ ◉ │  ✦
    ╲ ▁ ╱  ╱
  ╭─┴───┴─╯
  │╲│╱│╲│╱
  ╰╯╰╯╰╯╰╯",
);

pub const SPRITE_ENT: MonsterSprite = MonsterSprite::new(
    r"  ╲╲ ╱╱╲ ╱╱
   ╲█████╱
    │● ●│
    │ ═ │
   ╱│███│╲
    ╱╱ ╲╲",
);

pub const SPRITE_HORNED_GUARD: MonsterSprite = MonsterSprite::new(
    r"   ╱╲   ╱╲
    ╲▓▓▓▓╱
    │▼  ▼│
    ╰┬──┬╯
   ╔═╧══╧═╗ │
   ║ ████ ║─┼─
    ╱╱  ╲╲",
);

pub const SPRITE_CENTAUR_SLAVER: MonsterSprite = MonsterSprite::new(
    r"    ◕‿◕
   ─┼─ ~~
    │______
    ████████╲
    ╱╱    ╲╲",
);

pub const SPRITE_DISTURBED_WRAITH: MonsterSprite = MonsterSprite::new(
    r"   ░░▒▒░░
  ░▒ ◌ ◌ ▒░
  ░▒  ○  ▒░
   ▒░░░░░▒
    ░ ░ ░
   ░ ░ ░",
);

pub const SPRITE_EYE_FIEND: MonsterSprite = MonsterSprite::new(
    r"  ╲ │ ╱
 ╭──────╮
 │ ╭──╮ │
 │ │◉ │ │
 │ ╰──╯ │
 ╰──────╯
  ╱ │ ╲",
);

pub const SPRITE_JUVENILE_WYRM: MonsterSprite = MonsterSprite::new(
    r"      ╱▔▔╲
  ╱╲ │◆ ◆│
 ╱  ╲╰╮▼▼╯
 ╲▓▓▓▓▓▓╯
   ╰╮▓▓╭~~~╯
    ╱╱ ╲╲",
);

pub const SPRITE_NOXIOUS_SLIME: MonsterSprite = MonsterSprite::new(
    r"     ▁▁▁
   ╱ ° ° ╲
  │  ~~~  │
 ╱▒▒▒▒▒▒▒▒▒╲
 ▔▔▔▔▔▔▔▔▔▔▔",
);

pub const SPRITE_PIXEL_GOLEM: MonsterSprite = MonsterSprite::new(
    r"   ┌─────┐
   │ ■ ■ │
   └┬───┬┘
 ┌──┴───┴──┐
 │ ███████ │
 └─┬─────┬─┘
   █     █",
);

pub const SPRITE_SMALL_FISH: MonsterSprite = MonsterSprite::new(
    r"
   ╱╲   ___
  ╱  ╲╱ °  ╲
  ╲  ╱╲ ≈≈ ╱
   ╲╱   ▔▔▔",
);

const SPRITE_UNKNOWN: MonsterSprite = MonsterSprite::new(
    r"   ?????
  ?     ?
      ??
     ?
     .",
);

/// Looks up a portrait by sprite id, falling back to a placeholder.
pub fn sprite_for(id: &str) -> &'static MonsterSprite {
    match id {
        "tentacle_mage" => &SPRITE_TENTACLE_MAGE,
        "ent" => &SPRITE_ENT,
        "horned_guard" => &SPRITE_HORNED_GUARD,
        "centaur_slaver" => &SPRITE_CENTAUR_SLAVER,
        "disturbed_wraith" => &SPRITE_DISTURBED_WRAITH,
        "eye_fiend" => &SPRITE_EYE_FIEND,
        "juvenile_wyrm" => &SPRITE_JUVENILE_WYRM,
        "noxious_slime" => &SPRITE_NOXIOUS_SLIME,
        "pixel_golem" => &SPRITE_PIXEL_GOLEM,
        "small_fish" => &SPRITE_SMALL_FISH,
        _ => &SPRITE_UNKNOWN,
    }
}
