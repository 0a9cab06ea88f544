//! AniList GraphQL queries
//!
//! One named operation per catalog query. List queries share the
//! `BasicMedia` fragment so every row carries the same summary fields.

macro_rules! basic_media_fragment {
    () => {
        r#"
fragment BasicMedia on Media {
  id
  idMal
  title {
    romaji
    english
    native
    userPreferred
  }
  type
  format
  status
  season
  seasonYear
  episodes
  chapters
  volumes
  averageScore
  meanScore
  popularity
  favourites
  isFavourite
  isAdult
  countryOfOrigin
  genres
  startDate {
    year
    month
    day
  }
  coverImage {
    extraLarge
    large
    medium
    color
  }
  bannerImage
  nextAiringEpisode {
    airingAt
    timeUntilAiring
    episode
  }
}
"#
    };
}

macro_rules! page_info_fields {
    () => {
        r#"
    pageInfo {
      total
      perPage
      currentPage
      lastPage
      hasNextPage
    }"#
    };
}

pub const SEASONAL_MEDIA_QUERY: &str = concat!(
    r#"
query SeasonalMedia($page: Int, $perPage: Int, $season: MediaSeason, $seasonYear: Int, $type: MediaType, $sort: [MediaSort]) {
  Page(page: $page, perPage: $perPage) {"#,
    page_info_fields!(),
    r#"
    media(season: $season, seasonYear: $seasonYear, type: $type, sort: $sort) {
      ...BasicMedia
    }
  }
}
"#,
    basic_media_fragment!()
);

pub const TRENDING_MEDIA_QUERY: &str = concat!(
    r#"
query TrendingMedia($page: Int, $perPage: Int, $type: MediaType) {
  Page(page: $page, perPage: $perPage) {"#,
    page_info_fields!(),
    r#"
    media(type: $type, sort: [TRENDING_DESC, POPULARITY_DESC]) {
      ...BasicMedia
    }
  }
}
"#,
    basic_media_fragment!()
);

pub const POPULAR_MEDIA_QUERY: &str = concat!(
    r#"
query PopularMedia($page: Int, $perPage: Int, $type: MediaType) {
  Page(page: $page, perPage: $perPage) {"#,
    page_info_fields!(),
    r#"
    media(type: $type, sort: POPULARITY_DESC) {
      ...BasicMedia
    }
  }
}
"#,
    basic_media_fragment!()
);

pub const AIRING_SCHEDULE_QUERY: &str = concat!(
    r#"
query AiringSchedule($page: Int, $perPage: Int, $airingAtGreater: Int, $airingAtLesser: Int) {
  Page(page: $page, perPage: $perPage) {"#,
    page_info_fields!(),
    r#"
    airingSchedules(airingAt_greater: $airingAtGreater, airingAt_lesser: $airingAtLesser, sort: TIME_DESC) {
      id
      airingAt
      episode
      media {
        ...BasicMedia
      }
    }
  }
}
"#,
    basic_media_fragment!()
);

pub const SEARCH_MEDIA_QUERY: &str = concat!(
    r#"
query SearchMedia($page: Int, $perPage: Int, $search: String, $type: MediaType, $format: [MediaFormat], $status: MediaStatus, $genres: [String], $tags: [String], $countryOfOrigin: CountryCode, $season: MediaSeason, $seasonYear: Int, $sort: [MediaSort]) {
  Page(page: $page, perPage: $perPage) {"#,
    page_info_fields!(),
    r#"
    media(search: $search, type: $type, format_in: $format, status: $status, genre_in: $genres, tag_in: $tags, countryOfOrigin: $countryOfOrigin, season: $season, seasonYear: $seasonYear, sort: $sort) {
      ...BasicMedia
    }
  }
}
"#,
    basic_media_fragment!()
);

pub const MEDIA_DETAILS_QUERY: &str = concat!(
    r#"
query MediaDetails($mediaId: Int) {
  Media(id: $mediaId) {
    ...BasicMedia
    description(asHtml: false)
    endDate {
      year
      month
      day
    }
    duration
    source
    synonyms
    tags {
      id
      name
      rank
      isMediaSpoiler
    }
    studios {
      edges {
        isMain
        node {
          id
          name
          isAnimationStudio
        }
      }
    }
    characters(page: 1, perPage: 25, sort: [ROLE, RELEVANCE]) {
      edges {
        role
        node {
          id
          name {
            full
            native
            userPreferred
          }
          image {
            medium
          }
          favourites
        }
        voiceActors(language: JAPANESE) {
          id
          name {
            full
            native
            userPreferred
          }
          image {
            medium
          }
          languageV2
        }
      }
    }
    staff(page: 1, perPage: 25, sort: RELEVANCE) {
      edges {
        role
        node {
          id
          name {
            full
            native
            userPreferred
          }
          image {
            medium
          }
          languageV2
        }
      }
    }
    relations {
      edges {
        relationType
        node {
          ...BasicMedia
        }
      }
    }
    recommendations(page: 1, perPage: 25, sort: RATING_DESC) {
      nodes {
        id
        rating
        mediaRecommendation {
          ...BasicMedia
        }
      }
    }
    reviews(page: 1, perPage: 5, sort: RATING_DESC) {
      nodes {
        id
        summary
        score
        rating
        ratingAmount
        createdAt
        user {
          id
          name
          avatar {
            medium
          }
        }
      }
    }
    stats {
      scoreDistribution {
        score
        amount
      }
      statusDistribution {
        status
        amount
      }
    }
  }
}
"#,
    basic_media_fragment!()
);

pub const MEDIA_THREADS_QUERY: &str = r#"
query MediaThreads($mediaId: Int, $page: Int, $perPage: Int) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      perPage
      currentPage
      lastPage
      hasNextPage
    }
    threads(mediaCategoryId: $mediaId, sort: [IS_STICKY, REPLIED_AT_DESC]) {
      id
      title
      replyCount
      viewCount
      repliedAt
      createdAt
      user {
        id
        name
        avatar {
          medium
        }
      }
    }
  }
}
"#;

pub const MEDIA_REVIEWS_QUERY: &str = r#"
query MediaReviews($mediaId: Int, $page: Int, $perPage: Int) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      perPage
      currentPage
      lastPage
      hasNextPage
    }
    reviews(mediaId: $mediaId, sort: RATING_DESC) {
      id
      summary
      score
      rating
      ratingAmount
      createdAt
      user {
        id
        name
        avatar {
          medium
        }
      }
    }
  }
}
"#;

pub const GENRE_TAG_COLLECTION_QUERY: &str = r#"
query GenreTagCollection {
  GenreCollection
  MediaTagCollection {
    name
    category
    isAdult
  }
}
"#;
