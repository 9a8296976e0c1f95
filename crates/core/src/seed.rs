//! Records loaded into the store at startup.

use crate::movie::Movie;

/// (title, genre, year, director) for each seed record, in id order.
const SEED: [(&str, &str, i32, &str); 7] = [
    ("The Shawshank Redemption", "Drama", 1994, "Frank Darabont"),
    ("The Godfather", "Crime", 1972, "Francis Ford Coppola"),
    ("The Dark Knight", "Action", 2008, "Christopher Nolan"),
    ("Pulp Fiction", "Crime", 1994, "Quentin Tarantino"),
    ("Forrest Gump", "Drama", 1994, "Robert Zemeckis"),
    ("Inception", "Sci-Fi", 2010, "Christopher Nolan"),
    ("Interstellar", "Sci-Fi", 2014, "Christopher Nolan"),
];

/// The seven seed records with ids 1 through 7.
pub fn seed_movies() -> Vec<Movie> {
    SEED.iter()
        .zip(1..)
        .map(|(&(title, genre, year, director), id)| Movie {
            id,
            title: title.to_string(),
            genre: genre.to_string(),
            year,
            director: director.to_string(),
        })
        .collect()
}
