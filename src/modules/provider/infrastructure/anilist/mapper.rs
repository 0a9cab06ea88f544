//! AniList wire → domain mapping
//!
//! Null handling rules:
//! - a null `pageInfo` stays `None`, it is never replaced by zeroed metadata;
//! - a null list becomes an empty `data`, null elements are dropped;
//! - records without their required identifier are dropped and logged.

use super::dto::*;
use crate::modules::media::domain::{
    AiringSchedule, Character, CharacterEdge, CoverImage, FuzzyDate, GenreTagCollection, Media,
    MediaRelation, MediaRelationType, MediaStats, MediaTag, MediaTitle, NextAiringEpisode,
    PersonName, Recommendation, Review, ScoreDistribution, Staff, StaffEdge, StatusDistribution,
    Studio, TagOption, Thread, User,
};
use crate::shared::application::{Page, PageInfo};

/// AniList specific mapper implementation
#[derive(Debug, Clone, Default)]
pub struct AniListMapper;

impl AniListMapper {
    pub fn new() -> Self {
        Self
    }

    /// Page of media; a missing `Page` object yields an empty page without info
    pub fn media_page(&self, page: Option<PageDto>) -> Page<Media> {
        let page = page.unwrap_or_default();
        Self::collect_page(page.page_info, page.media, |dto| self.media(dto))
    }

    pub fn airing_schedule_page(&self, page: Option<PageDto>) -> Page<AiringSchedule> {
        let page = page.unwrap_or_default();
        Self::collect_page(page.page_info, page.airing_schedules, |dto| {
            self.airing_schedule(dto)
        })
    }

    pub fn thread_page(&self, page: Option<PageDto>) -> Page<Thread> {
        let page = page.unwrap_or_default();
        Self::collect_page(page.page_info, page.threads, |dto| self.thread(dto))
    }

    pub fn review_page(&self, page: Option<PageDto>) -> Page<Review> {
        let page = page.unwrap_or_default();
        Self::collect_page(page.page_info, page.reviews, |dto| self.review(dto))
    }

    fn collect_page<D, T, F>(
        page_info: Option<PageInfoDto>,
        items: Option<Vec<Option<D>>>,
        map: F,
    ) -> Page<T>
    where
        F: Fn(D) -> Option<T>,
    {
        let data = Self::flatten(items).into_iter().filter_map(map).collect();
        Page::new(page_info.map(Self::page_info), data)
    }

    pub fn page_info(dto: PageInfoDto) -> PageInfo {
        PageInfo {
            total: dto.total,
            per_page: dto.per_page,
            current_page: dto.current_page,
            last_page: dto.last_page,
            has_next_page: dto.has_next_page.unwrap_or(false),
        }
    }

    /// Map a media record; `None` when the id is missing
    pub fn media(&self, dto: MediaDto) -> Option<Media> {
        let Some(id) = dto.id else {
            log::warn!("AniList: dropping media without id");
            return None;
        };

        Some(Media {
            id,
            id_mal: dto.id_mal,
            title: dto.title.map(|t| MediaTitle {
                romaji: t.romaji,
                english: t.english,
                native: t.native,
                user_preferred: t.user_preferred,
            }),
            media_type: dto.media_type,
            format: dto.format,
            status: dto.status,
            description: dto.description,
            start_date: dto.start_date.map(Self::fuzzy_date),
            end_date: dto.end_date.map(Self::fuzzy_date),
            season: dto.season,
            season_year: dto.season_year,
            episodes: dto.episodes,
            duration: dto.duration,
            chapters: dto.chapters,
            volumes: dto.volumes,
            country_of_origin: dto.country_of_origin,
            source: dto.source,
            cover_image: dto.cover_image.map(|c| CoverImage {
                extra_large: c.extra_large,
                large: c.large,
                medium: c.medium,
                color: c.color,
            }),
            banner_image: dto.banner_image,
            genres: Self::flatten(dto.genres),
            synonyms: Self::flatten(dto.synonyms),
            tags: Self::flatten(dto.tags)
                .into_iter()
                .filter_map(|t| {
                    Some(MediaTag {
                        id: t.id?,
                        name: t.name?,
                        rank: t.rank,
                        is_spoiler: t.is_media_spoiler.unwrap_or(false),
                    })
                })
                .collect(),
            average_score: dto.average_score,
            mean_score: dto.mean_score,
            popularity: dto.popularity,
            favourites: dto.favourites,
            is_adult: dto.is_adult,
            is_favourite: dto.is_favourite.unwrap_or(false),
            next_airing_episode: dto.next_airing_episode.and_then(|n| {
                Some(NextAiringEpisode {
                    airing_at: n.airing_at?,
                    time_until_airing: n.time_until_airing.unwrap_or(0),
                    episode: n.episode?,
                })
            }),
            studios: dto
                .studios
                .map(|c| self.studios(c))
                .unwrap_or_default(),
            characters: dto
                .characters
                .map(|c| self.characters(c))
                .unwrap_or_default(),
            staff: dto.staff.map(|c| self.staff_edges(c)).unwrap_or_default(),
            relations: dto
                .relations
                .map(|c| self.relations(c))
                .unwrap_or_default(),
            recommendations: dto
                .recommendations
                .map(|c| self.recommendations(c))
                .unwrap_or_default(),
            reviews: dto
                .reviews
                .map(|c| {
                    Self::flatten(c.nodes)
                        .into_iter()
                        .filter_map(|r| self.review(r))
                        .collect()
                })
                .unwrap_or_default(),
            stats: dto.stats.map(Self::stats),
        })
    }

    pub fn airing_schedule(&self, dto: AiringScheduleDto) -> Option<AiringSchedule> {
        let (Some(id), Some(airing_at), Some(episode)) = (dto.id, dto.airing_at, dto.episode)
        else {
            log::warn!("AniList: dropping incomplete airing schedule {:?}", dto.id);
            return None;
        };
        let media = self.media(dto.media?)?;

        Some(AiringSchedule {
            id,
            airing_at,
            episode,
            media,
        })
    }

    pub fn thread(&self, dto: ThreadDto) -> Option<Thread> {
        Some(Thread {
            id: dto.id?,
            title: dto.title,
            reply_count: dto.reply_count,
            view_count: dto.view_count,
            replied_at: dto.replied_at,
            created_at: dto.created_at.unwrap_or(0),
            user: dto.user.and_then(Self::user),
        })
    }

    pub fn review(&self, dto: ReviewDto) -> Option<Review> {
        Some(Review {
            id: dto.id?,
            summary: dto.summary,
            score: dto.score,
            rating: dto.rating,
            rating_amount: dto.rating_amount,
            created_at: dto.created_at,
            user: dto.user.and_then(Self::user),
        })
    }

    pub fn genre_tag_collection(&self, dto: GenreTagCollectionData) -> GenreTagCollection {
        GenreTagCollection {
            genres: Self::flatten(dto.genre_collection),
            tags: Self::flatten(dto.media_tag_collection)
                .into_iter()
                .filter_map(|t| {
                    Some(TagOption {
                        name: t.name?,
                        category: t.category,
                        is_adult: t.is_adult.unwrap_or(false),
                    })
                })
                .collect(),
        }
    }

    fn studios(&self, dto: StudioConnectionDto) -> Vec<Studio> {
        Self::flatten(dto.edges)
            .into_iter()
            .filter_map(|edge| {
                let node = edge.node?;
                Some(Studio {
                    id: node.id?,
                    name: node.name?,
                    is_main: edge.is_main.unwrap_or(false),
                    is_animation_studio: node.is_animation_studio.unwrap_or(false),
                })
            })
            .collect()
    }

    fn characters(&self, dto: CharacterConnectionDto) -> Vec<CharacterEdge> {
        Self::flatten(dto.edges)
            .into_iter()
            .filter_map(|edge| {
                let node = edge.node?;
                Some(CharacterEdge {
                    role: edge.role,
                    character: Character {
                        id: node.id?,
                        name: node.name.map(Self::name),
                        image: node.image.and_then(|i| i.medium),
                        favourites: node.favourites,
                    },
                    voice_actors: Self::flatten(edge.voice_actors)
                        .into_iter()
                        .filter_map(Self::staff)
                        .collect(),
                })
            })
            .collect()
    }

    fn staff_edges(&self, dto: StaffConnectionDto) -> Vec<StaffEdge> {
        Self::flatten(dto.edges)
            .into_iter()
            .filter_map(|edge| {
                Some(StaffEdge {
                    role: edge.role,
                    staff: Self::staff(edge.node?)?,
                })
            })
            .collect()
    }

    fn relations(&self, dto: RelationConnectionDto) -> Vec<MediaRelation> {
        Self::flatten(dto.edges)
            .into_iter()
            .filter_map(|edge| {
                Some(MediaRelation {
                    relation_type: edge.relation_type.unwrap_or(MediaRelationType::Unknown),
                    media: self.media(edge.node?)?,
                })
            })
            .collect()
    }

    fn recommendations(&self, dto: RecommendationConnectionDto) -> Vec<Recommendation> {
        Self::flatten(dto.nodes)
            .into_iter()
            .filter_map(|node| {
                Some(Recommendation {
                    id: node.id?,
                    rating: node.rating,
                    media: self.media(node.media_recommendation?)?,
                })
            })
            .collect()
    }

    fn staff(dto: StaffDto) -> Option<Staff> {
        Some(Staff {
            id: dto.id?,
            name: dto.name.map(Self::name),
            image: dto.image.and_then(|i| i.medium),
            language: dto.language,
        })
    }

    fn user(dto: UserDto) -> Option<User> {
        Some(User {
            id: dto.id?,
            name: dto.name.unwrap_or_default(),
            avatar: dto.avatar.and_then(|a| a.medium),
        })
    }

    fn name(dto: NameDto) -> PersonName {
        PersonName {
            full: dto.full,
            native: dto.native,
            user_preferred: dto.user_preferred,
        }
    }

    fn stats(dto: StatsDto) -> MediaStats {
        MediaStats {
            score_distribution: Self::flatten(dto.score_distribution)
                .into_iter()
                .filter_map(|s| {
                    Some(ScoreDistribution {
                        score: s.score?,
                        amount: s.amount.unwrap_or(0),
                    })
                })
                .collect(),
            status_distribution: Self::flatten(dto.status_distribution)
                .into_iter()
                .filter_map(|s| {
                    Some(StatusDistribution {
                        status: s.status?,
                        amount: s.amount.unwrap_or(0),
                    })
                })
                .collect(),
        }
    }

    /// AniList fuzzy date; out-of-range month or day components are dropped
    fn fuzzy_date(dto: FuzzyDateDto) -> FuzzyDate {
        FuzzyDate {
            year: dto.year,
            month: dto.month.and_then(|m| u32::try_from(m).ok()),
            day: dto.day.and_then(|d| u32::try_from(d).ok()),
        }
    }

    fn flatten<T>(items: Option<Vec<Option<T>>>) -> Vec<T> {
        items.unwrap_or_default().into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_dto(json: &str) -> Option<PageDto> {
        serde_json::from_str::<PageData>(json).unwrap().page
    }

    #[test]
    fn test_null_page_info_passes_through() {
        let mapper = AniListMapper::new();
        let page = mapper.airing_schedule_page(page_dto(
            r#"{ "Page": { "pageInfo": null, "airingSchedules": null } }"#,
        ));
        assert!(page.page_info.is_none());
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_null_media_keeps_page_info() {
        let mapper = AniListMapper::new();
        let page = mapper.media_page(page_dto(
            r#"{ "Page": {
                "pageInfo": { "total": 0, "perPage": 10, "currentPage": 1, "lastPage": 1, "hasNextPage": false },
                "media": null
            } }"#,
        ));
        assert!(page.data.is_empty());
        let info = page.page_info.unwrap();
        assert_eq!(info.total, Some(0));
        assert_eq!(info.per_page, Some(10));
        assert!(!info.has_next_page);
    }

    #[test]
    fn test_partial_page_info_is_not_defaulted() {
        let mapper = AniListMapper::new();
        let page = mapper.media_page(page_dto(
            r#"{ "Page": {
                "pageInfo": { "total": null, "perPage": 25, "currentPage": 2, "lastPage": null, "hasNextPage": true },
                "media": []
            } }"#,
        ));
        let info = page.page_info.unwrap();
        assert_eq!(info.total, None);
        assert_eq!(info.last_page, None);
        assert_eq!(info.per_page, Some(25));
        assert_eq!(info.current_page, Some(2));
        assert!(info.has_next_page);
    }

    #[test]
    fn test_missing_page_object() {
        let mapper = AniListMapper::new();
        let page = mapper.media_page(page_dto(r#"{ "Page": null }"#));
        assert_eq!(page, Page::empty());
    }

    #[test]
    fn test_null_elements_and_missing_ids_are_dropped() {
        let mapper = AniListMapper::new();
        let page = mapper.media_page(page_dto(
            r#"{ "Page": { "pageInfo": null, "media": [ { "id": 3 }, null, { "id": null }, { "id": 1 } ] } }"#,
        ));
        assert_eq!(page.data.iter().map(|m| m.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_schedule_requires_media() {
        let mapper = AniListMapper::new();
        let page = mapper.airing_schedule_page(page_dto(
            r#"{ "Page": { "pageInfo": null, "airingSchedules": [
                { "id": 1, "airingAt": 1700000000, "episode": 4, "media": { "id": 20 } },
                { "id": 2, "airingAt": 1700000100, "episode": 5, "media": null }
            ] } }"#,
        ));
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].media.id, 20);
        assert_eq!(page.data[0].episode, 4);
    }

    #[test]
    fn test_media_connections() {
        let json = r#"{
            "id": 154587,
            "title": { "romaji": "Sousou no Frieren", "english": "Frieren: Beyond Journey's End" },
            "startDate": { "year": 2023, "month": 9, "day": 29 },
            "isFavourite": true,
            "studios": { "edges": [ { "isMain": true, "node": { "id": 11, "name": "Madhouse", "isAnimationStudio": true } } ] },
            "characters": { "edges": [ {
                "role": "MAIN",
                "node": { "id": 1, "name": { "full": "Frieren" }, "image": { "medium": "img" } },
                "voiceActors": [ { "id": 5, "name": { "full": "Atsumi Tanezaki" }, "languageV2": "Japanese" } ]
            } ] },
            "relations": { "edges": [ { "relationType": "SOURCE", "node": { "id": 118586 } } ] },
            "stats": { "scoreDistribution": [ { "score": 100, "amount": 9 } ], "statusDistribution": [ { "status": "CURRENT", "amount": 4 } ] }
        }"#;
        let dto: MediaDto = serde_json::from_str(json).unwrap();
        let media = AniListMapper::new().media(dto).unwrap();

        assert!(media.is_favourite);
        assert!(media.start_date.unwrap().is_fully_known());
        assert_eq!(media.main_studios().count(), 1);
        assert_eq!(media.characters[0].voice_actors[0].id, 5);
        assert_eq!(media.relations[0].relation_type, MediaRelationType::Source);
        assert_eq!(media.stats.unwrap().total_scored(), 9);
    }

    #[test]
    fn test_genre_tag_collection() {
        let data: GenreTagCollectionData = serde_json::from_str(
            r#"{ "GenreCollection": ["Action", null, "Drama"],
                 "MediaTagCollection": [ { "name": "Isekai", "category": "Theme", "isAdult": false }, { "name": null } ] }"#,
        )
        .unwrap();
        let collection = AniListMapper::new().genre_tag_collection(data);
        assert_eq!(collection.genres, vec!["Action", "Drama"]);
        assert_eq!(collection.tags.len(), 1);
        assert_eq!(collection.tags[0].name, "Isekai");
    }
}
