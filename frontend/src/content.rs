//! Everything the page says and shows. Compiled in and never mutated.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    pub id: u32,
    pub image_url: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picture {
    pub url: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chapter {
    pub numeral: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

impl Chapter {
    pub fn heading(&self) -> String {
        format!("Capítulo {}: {}", self.numeral, self.title)
    }
}

pub const BACKDROP_URL: &str =
    "https://i.pinimg.com/736x/c1/7d/71/c17d71cb3196ff77d46caff2e2fbf5fe.jpg";

pub const HERO_TITLE: &str = "Nuestro Castillo Vagabundo";
pub const HERO_SUBTITLE: &str = "Un Año de Magia Juntos";
pub const HERO_CALL_TO_ACTION: &str = "Comienza Nuestro Viaje";

pub const BEGINNING: Chapter = Chapter {
    numeral: "I",
    title: "El Inicio",
    body: "Se siente como si fuera ayer y al mismo tiempo toda una vida desde que comenzó nuestra historia. Desde esa primera conversación, supe que algo era diferente. Fue el comienzo de nuestra propia aventura mágica, una puerta que se abría a un mundo que no sabía que me estaba perdiendo.",
};

pub const FIRSTS: Chapter = Chapter {
    numeral: "II",
    title: "Nuestras Primeras Veces",
    body: "¿Recuerdas nuestra primera [cita, viaje, etc.]? El mundo pareció desvanecerse, y solo éramos nosotros. Cada primer momento contigo ha sido un tesoro, pintando nuestra historia con colores vibrantes y sentimientos inolvidables.",
};

pub const FIRSTS_PICTURE: Picture = Picture {
    url: "https://drive.google.com/uc?export=view&id=1D_-dlLzqgrkneLf3p5XzSIZQgFVaSmJi",
    alt: "Recuerdo de la primera cita",
};

pub const GALLERY: Chapter = Chapter {
    numeral: "III",
    title: "Una Galería de Momentos",
    body: "Este último año ha estado lleno de tantos momentos hermosos, grandes y pequeños. Aquí hay solo algunas de las instantáneas que viven en mi corazón.",
};

pub const THINGS_I_LOVE: Chapter = Chapter {
    numeral: "IV",
    title: "Las Cosas que Amo",
    body: "Es difícil enumerar todo, pero aquí hay algunas de las innumerables cosas que adoro de ti.",
};

pub const THINGS_I_LOVE_PICTURE: Picture = Picture {
    url: "https://picsum.photos/seed/love/800/600",
    alt: "Un momento de amor",
};

pub const FUTURE: Chapter = Chapter {
    numeral: "V",
    title: "Hacia Nuestro Futuro",
    body: "Un año es solo el primer capítulo. No puedo esperar a ver a dónde nos lleva nuestro castillo vagabundo a continuación. Contigo, cada día es una aventura mágica, y espero toda una vida de ellas.",
};

pub const CLOSING_LINE: &str = "Feliz Aniversario, mi amor.";

pub const FOOTER: &str = "Hecho con \u{2665} para ti.";

pub static MEMORIES: [Memory; 6] = [
    Memory { id: 1, image_url: "https://picsum.photos/seed/memory1/600/800", caption: "Nuestra Primera Aventura" },
    Memory { id: 2, image_url: "https://picsum.photos/seed/memory2/600/800", caption: "Ese Café Acogedor" },
    Memory { id: 3, image_url: "https://picsum.photos/seed/memory3/600/800", caption: "Viendo el Atardecer" },
    Memory { id: 4, image_url: "https://picsum.photos/seed/memory4/600/800", caption: "Momentos Tontos" },
    Memory { id: 5, image_url: "https://picsum.photos/seed/memory5/600/800", caption: "Bailando en la Cocina" },
    Memory { id: 6, image_url: "https://picsum.photos/seed/memory6/600/800", caption: "Magia Festiva" },
];

pub static REASONS: [&str; 5] = [
    "La forma en que te ríes de mis chistes tontos.",
    "Tu amabilidad con todos los que conoces.",
    "Cómo se iluminan tus ojos cuando te apasiona algo.",
    "Tu increíble fuerza y resiliencia.",
    "La sensación de hogar que tengo cuando estoy contigo.",
];
