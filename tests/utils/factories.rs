/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::NaiveDate;
use marquee_lib::modules::{
    catalog::domain::{Actor, Item, ItemType},
    rating::domain::Rating,
};
use uuid::Uuid;

pub struct ItemFactory {
    id: Uuid,
    title: String,
    overview: String,
    item_type: ItemType,
    release_date: NaiveDate,
    poster_path: Option<String>,
    actors: Vec<Actor>,
    ratings: Vec<(Uuid, f64)>,
}

impl Default for ItemFactory {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Test Movie".to_string(),
            overview: String::new(),
            item_type: ItemType::Movie,
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            poster_path: None,
            actors: Vec::new(),
            ratings: Vec::new(),
        }
    }
}

impl ItemFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn overview(mut self, overview: &str) -> Self {
        self.overview = overview.to_string();
        self
    }

    pub fn show(mut self) -> Self {
        self.item_type = ItemType::Show;
        self
    }

    pub fn released(mut self, year: i32, month: u32, day: u32) -> Self {
        self.release_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn poster(mut self, poster_path: &str) -> Self {
        self.poster_path = Some(poster_path.to_string());
        self
    }

    pub fn actor(mut self, name: &str, surname: &str) -> Self {
        self.actors.push(Actor::new(name, surname));
        self
    }

    /// Rating by an arbitrary user
    pub fn rated(mut self, value: f64) -> Self {
        self.ratings.push((Uuid::new_v4(), value));
        self
    }

    pub fn rated_by(mut self, user_id: Uuid, value: f64) -> Self {
        self.ratings.push((user_id, value));
        self
    }

    pub fn build(self) -> Item {
        let id = self.id;
        Item {
            id,
            title: self.title,
            overview: self.overview,
            item_type: self.item_type,
            release_date: self.release_date,
            poster_path: self.poster_path,
            actors: self.actors,
            ratings: self
                .ratings
                .into_iter()
                .map(|(user_id, value)| Rating {
                    id: Uuid::new_v4(),
                    value,
                    item_id: id,
                    user_id,
                })
                .collect(),
        }
    }
}

pub fn shawshank() -> ItemFactory {
    ItemFactory::new()
        .title("The Shawshank Redemption")
        .overview("Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.")
        .released(1994, 9, 22)
        .poster("https://example.org/posters/shawshank.jpg")
        .actor("Morgan", "Freeman")
        .actor("Bob", "Gunton")
}

pub fn godfather() -> ItemFactory {
    ItemFactory::new()
        .title("The Godfather")
        .overview("An organized crime dynasty's aging patriarch transfers control of his clandestine empire to his reluctant son.")
        .released(1972, 3, 24)
        .poster("https://example.org/posters/godfather.jpg")
}

pub fn godfather_part_two() -> ItemFactory {
    ItemFactory::new()
        .title("The Godfather: Part II")
        .overview("The early life and career of Vito Corleone in 1920s New York City is portrayed, while his son, Michael, expands and tightens his grip on the family crime syndicate.")
        .released(1974, 12, 20)
        .poster("https://example.org/posters/godfather2.jpg")
}
