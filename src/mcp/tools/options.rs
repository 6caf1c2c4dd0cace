//! Enumerated tool parameters.
//!
//! Wire values match the Jikan v4 query parameters exactly.

use std::fmt;

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};

macro_rules! query_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

query_enum! {
    /// Anime media type.
    AnimeType {
        Tv => "tv",
        Movie => "movie",
        Ova => "ova",
        Special => "special",
        Ona => "ona",
        Music => "music",
        Cm => "cm",
        Pv => "pv",
        TvSpecial => "tv_special",
    }
}

query_enum! {
    /// Media types accepted by the seasonal listing filter.
    SeasonFilter {
        Tv => "tv",
        Movie => "movie",
        Ova => "ova",
        Special => "special",
        Ona => "ona",
        Music => "music",
    }
}

query_enum! {
    AnimeStatus {
        Airing => "airing",
        Complete => "complete",
        Upcoming => "upcoming",
    }
}

query_enum! {
    /// Audience rating.
    AnimeRating {
        G => "g",
        Pg => "pg",
        Pg13 => "pg13",
        R17 => "r17",
        R => "r",
        Rx => "rx",
    }
}

query_enum! {
    AnimeOrderBy {
        MalId => "mal_id",
        Title => "title",
        StartDate => "start_date",
        EndDate => "end_date",
        Episodes => "episodes",
        Score => "score",
        ScoredBy => "scored_by",
        Rank => "rank",
        Popularity => "popularity",
        Members => "members",
        Favorites => "favorites",
    }
}

query_enum! {
    TopAnimeFilter {
        Airing => "airing",
        Upcoming => "upcoming",
        ByPopularity => "bypopularity",
        Favorite => "favorite",
    }
}

query_enum! {
    Season {
        Winter => "winter",
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
    }
}

query_enum! {
    /// Manga publication type.
    MangaType {
        Manga => "manga",
        Novel => "novel",
        LightNovel => "lightnovel",
        Oneshot => "oneshot",
        Doujin => "doujin",
        Manhwa => "manhwa",
        Manhua => "manhua",
    }
}

query_enum! {
    MangaStatus {
        Publishing => "publishing",
        Complete => "complete",
        Hiatus => "hiatus",
        Discontinued => "discontinued",
        Upcoming => "upcoming",
    }
}

query_enum! {
    MangaOrderBy {
        MalId => "mal_id",
        Title => "title",
        StartDate => "start_date",
        EndDate => "end_date",
        Chapters => "chapters",
        Volumes => "volumes",
        Score => "score",
        ScoredBy => "scored_by",
        Rank => "rank",
        Popularity => "popularity",
        Members => "members",
        Favorites => "favorites",
    }
}

query_enum! {
    TopMangaFilter {
        Publishing => "publishing",
        Upcoming => "upcoming",
        ByPopularity => "bypopularity",
        Favorite => "favorite",
    }
}

query_enum! {
    ProducerOrderBy {
        MalId => "mal_id",
        Count => "count",
        Favorites => "favorites",
        Established => "established",
    }
}

query_enum! {
    SortDirection {
        Asc => "asc",
        Desc => "desc",
    }
}
