//! Static site content.
//!
//! Everything the pages show is built here once and handed to the views as
//! plain values.

use crate::error::{CarouselError, LookupError};
use crate::slide::{Slide, SlideDeck};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub year: String,
    pub medium: String,
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEvent {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub day: &'static str,
    pub hours: &'static str,
}

/// The artwork collection in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self { artworks }
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.artworks.iter().position(|a| a.id == id)
    }

    pub fn require(&self, id: u32) -> Result<&Artwork, LookupError> {
        self.find(id).ok_or(LookupError::UnknownArtwork(id))
    }

    /// Resolves a route parameter to an artwork.
    ///
    /// The parameter is read as a number the way a browser would coerce it:
    /// whitespace is trimmed and integral forms such as `3.0` match id 3.
    /// Anything else, fractions included, finds nothing.
    pub fn find_by_param(&self, param: &str) -> Option<&Artwork> {
        let id = parse_id(param)?;
        self.find(id)
    }
}

fn parse_id(param: &str) -> Option<u32> {
    let trimmed = param.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(id) = trimmed.parse::<u32>() {
        return Some(id);
    }

    // Only plain decimal forms; rejects "inf", "NaN" and friends
    if !trimmed.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')) {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

pub fn hero_slides() -> Result<SlideDeck, CarouselError> {
    SlideDeck::new(vec![
        Slide::new(
            1,
            "Impressionist Dreams",
            "Explore the movement that changed art forever",
            "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5?w=1600&h=900&fit=crop",
        ),
        Slide::new(
            2,
            "Modern Abstractions",
            "Bold colors and forms that challenge perception",
            "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=1600&h=900&fit=crop",
        ),
        Slide::new(
            3,
            "Sculptural Elegance",
            "Where form meets the poetry of space",
            "https://images.unsplash.com/photo-1518998053901-5348d3961a04?w=1600&h=900&fit=crop",
        ),
    ])
}

fn artwork(id: u32, title: &str, artist: &str, year: &str, medium: &str, image_url: &str, description: &str) -> Artwork {
    Artwork {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        year: year.to_string(),
        medium: medium.to_string(),
        image_url: image_url.to_string(),
        description: description.to_string(),
    }
}

pub fn catalog() -> Catalog {
    Catalog::new(vec![
        artwork(
            1,
            "Starry Night",
            "Vincent van Gogh",
            "1889",
            "Oil on canvas",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/e/ea/Van_Gogh_-_Starry_Night_-_Google_Art_Project.jpg/800px-Van_Gogh_-_Starry_Night_-_Google_Art_Project.jpg",
            "Painted in June 1889, Starry Night depicts the view from the east-facing window of Van Gogh's asylum room at Saint-Remy-de-Provence. The swirling night sky, luminous stars, and crescent moon create one of the most recognized images in Western art.",
        ),
        artwork(
            2,
            "The Great Wave off Kanagawa",
            "Katsushika Hokusai",
            "1831",
            "Woodblock print",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/Tsunami_by_hokusai_19th_century.jpg/800px-Tsunami_by_hokusai_19th_century.jpg",
            "Part of Hokusai's series \"Thirty-six Views of Mount Fuji,\" this iconic woodblock print shows a towering wave threatening boats near Kanagawa. The composition masterfully balances nature's power with the distant serenity of Mount Fuji.",
        ),
        artwork(
            3,
            "Girl with a Pearl Earring",
            "Johannes Vermeer",
            "1665",
            "Oil on canvas",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/0/0f/1665_Girl_with_a_Pearl_Earring.jpg/800px-1665_Girl_with_a_Pearl_Earring.jpg",
            "Often called the \"Mona Lisa of the North,\" Vermeer's masterpiece captures a girl in a blue and gold turban, glancing over her shoulder with an enigmatic expression. The luminous pearl earring is a focal point of this intimate portrait.",
        ),
        artwork(
            4,
            "The Birth of Venus",
            "Sandro Botticelli",
            "1485",
            "Tempera on canvas",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/0/0b/Sandro_Botticelli_-_La_nascita_di_Venere_-_Google_Art_Project_-_edited.jpg/800px-Sandro_Botticelli_-_La_nascita_di_Venere_-_Google_Art_Project_-_edited.jpg",
            "Botticelli's Renaissance masterpiece depicts the goddess Venus emerging from the sea as a fully grown woman. Commissioned by the Medici family, it is one of the most celebrated examples of Italian Renaissance painting.",
        ),
        artwork(
            5,
            "The Persistence of Memory",
            "Salvador Dali",
            "1931",
            "Oil on canvas",
            "https://upload.wikimedia.org/wikipedia/en/d/dd/The_Persistence_of_Memory.jpg",
            "Dali's surrealist icon features melting pocket watches draped across a dreamlike landscape. The painting explores the fluidity of time and the unreliability of perception, becoming a defining image of the Surrealist movement.",
        ),
        artwork(
            6,
            "A Sunday Afternoon on the Island of La Grande Jatte",
            "Georges Seurat",
            "1886",
            "Oil on canvas",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/7/7d/A_Sunday_on_La_Grande_Jatte%2C_Georges_Seurat%2C_1884.jpg/800px-A_Sunday_on_La_Grande_Jatte%2C_Georges_Seurat%2C_1884.jpg",
            "Seurat's monumental painting pioneered the Pointillist technique, using tiny dots of color to build a luminous scene of Parisians relaxing on the banks of the Seine. The work took over two years to complete.",
        ),
        artwork(
            7,
            "Golden Countryside",
            "AI Generated",
            "2026",
            "Digital, Impressionist",
            "/artwork/landscape.jpg",
            "A serene impressionist landscape depicting rolling countryside hills at golden hour. A winding river meanders through wildflower-dotted meadows as warm amber light bathes the scene, evoking the loose brushstrokes and atmospheric depth of the classic Impressionist masters.",
        ),
        artwork(
            8,
            "Vibrance in Form",
            "AI Generated",
            "2026",
            "Digital, Abstract",
            "/artwork/geometric.jpg",
            "A vibrant abstract composition of bold overlapping geometric shapes rendered in electric blue, fiery red, golden yellow, and deep purple. The dynamic arrangement evokes the energy of modern abstract expressionism with clean, sharp edges.",
        ),
        artwork(
            9,
            "Cosmic Genesis",
            "AI Generated",
            "2026",
            "Digital Art",
            "/artwork/cosmic.jpg",
            "A dramatic cosmic scene featuring a luminous supernova at its center, surrounded by swirling galaxies and distant stars. Deep space purples, electric cyans, and magenta hues pulse with neon energy across the infinite expanse of the universe.",
        ),
    ])
}

pub fn upcoming_events() -> Vec<GalleryEvent> {
    let event = |id, title: &str, description: &str, date: &str, time: &str, image_url: &str| GalleryEvent {
        id,
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        image_url: image_url.to_string(),
    };

    vec![
        event(
            1,
            "Abstract Visions: A New Perspective",
            "A curated exhibition featuring emerging abstract artists from around the globe. Experience art that pushes boundaries.",
            "Mar 15, 2026",
            "6:00 PM - 9:00 PM",
            "https://images.unsplash.com/photo-1547826039-bfc35e0f1ea8?w=600&h=400&fit=crop",
        ),
        event(
            2,
            "The Art of Light & Shadow",
            "An immersive installation exploring how light transforms space. Interactive elements invite visitors to become part of the art.",
            "Apr 2, 2026",
            "10:00 AM - 5:00 PM",
            "https://images.unsplash.com/photo-1482160549825-59d1b23cb208?w=600&h=400&fit=crop",
        ),
        event(
            3,
            "Sculpture in the Garden",
            "Our annual outdoor exhibition returns with monumental works set among the gallery gardens. Free and open to all.",
            "Apr 20, 2026",
            "11:00 AM - 7:00 PM",
            "https://images.unsplash.com/photo-1544967082-d9d25d867d66?w=600&h=400&fit=crop",
        ),
    ]
}

pub fn team_members() -> Vec<TeamMember> {
    let member = |id, name: &str, role: &str, bio: &str, image_url: &str| TeamMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        image_url: image_url.to_string(),
    };

    vec![
        member(
            1,
            "Elena Vasquez",
            "Founding Director",
            "With over 25 years in the art world, Elena brings visionary leadership and a passion for making art accessible to everyone.",
            "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=400&h=400&fit=crop&crop=face",
        ),
        member(
            2,
            "Marcus Chen",
            "Chief Curator",
            "Marcus specializes in contemporary and modern art, curating exhibitions that spark dialogue and inspire new ways of seeing.",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
        ),
        member(
            3,
            "Sophie Laurent",
            "Education Director",
            "A former art history professor, Sophie designs programs that connect visitors of all ages with the transformative power of art.",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=400&fit=crop&crop=face",
        ),
        member(
            4,
            "James Okafor",
            "Exhibition Designer",
            "James crafts immersive gallery spaces where architecture and art merge to create unforgettable experiences.",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
        ),
    ]
}

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Inspire",
        description: "We curate exhibitions that spark imagination and invite visitors to see the world through new eyes.",
    },
    Pillar {
        title: "Educate",
        description: "Through workshops, lectures, and guided tours, we make art history and practice approachable for everyone.",
    },
    Pillar {
        title: "Connect",
        description: "We bring artists and audiences together, fostering dialogue that enriches both the creative process and community life.",
    },
];

pub const OPENING_HOURS: [OpeningHours; 4] = [
    OpeningHours { day: "Monday", hours: "Closed" },
    OpeningHours { day: "Tuesday - Friday", hours: "10:00 AM - 6:00 PM" },
    OpeningHours { day: "Saturday", hours: "10:00 AM - 8:00 PM" },
    OpeningHours { day: "Sunday", hours: "12:00 PM - 5:00 PM" },
];

pub const MISSION: &str = "To inspire, educate, and connect communities through the transformative power of art, making extraordinary creative experiences accessible to all.";

pub const STORY: [&str; 3] = [
    "Founded in 1987 in the heart of the Arts District, Art Gallery began as a small exhibition space with a bold vision: to bridge the gap between world-class art and everyday audiences. What started as a single room with rotating local artists has grown into one of the region's most celebrated cultural destinations.",
    "Over three decades, we have hosted more than 500 exhibitions, welcomed millions of visitors, and built partnerships with museums and private collections across five continents. Our permanent collection now features over 2,000 works spanning five centuries of artistic achievement.",
    "Today, we continue to push boundaries by bringing emerging voices alongside established masters, integrating technology with tradition, and ensuring that art remains a living, breathing force in our community.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hero_slides_are_valid() {
        let deck = hero_slides().unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck[0].title, "Impressionist Dreams");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = catalog();
        let ids: HashSet<u32> = catalog.artworks().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn find_by_param_accepts_numeric_forms() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_param("3").map(|a| a.id), Some(3));
        assert_eq!(catalog.find_by_param(" 3 ").map(|a| a.id), Some(3));
        assert_eq!(catalog.find_by_param("3.0").map(|a| a.id), Some(3));
        assert_eq!(catalog.find_by_param("03").map(|a| a.id), Some(3));
    }

    #[test]
    fn find_by_param_rejects_the_rest() {
        let catalog = catalog();
        for param in ["", "   ", "abc", "3a", "2.5", "-1", "0", "10", "NaN", "Infinity", "inf", "99999999999"] {
            assert!(catalog.find_by_param(param).is_none(), "{param:?} should not resolve");
        }
    }

    #[test]
    fn require_reports_unknown_ids() {
        let catalog = catalog();
        assert_eq!(catalog.require(42), Err(LookupError::UnknownArtwork(42)));
        assert_eq!(catalog.require(1).map(|a| a.title.as_str()), Ok("Starry Night"));
        assert_eq!(catalog.position(9), Some(8));
    }

    #[test]
    fn static_sections_are_populated() {
        assert_eq!(upcoming_events().len(), 3);
        assert_eq!(team_members().len(), 4);
        assert_eq!(PILLARS.len(), 3);
        assert_eq!(OPENING_HOURS[0].hours, "Closed");
    }
}
