use itertools::Itertools;
use once_cell::sync::Lazy;
use tracing::{instrument, warn};

use crate::error::{LeagueError, Result};
use crate::model::{Fixture, FixtureStatus, NewsArticle, Player, Product, Standing, Team};
use crate::season;

/// Read-only catalog of one season's league data.
///
/// Collections are fixed at construction and every operation is a pure
/// read; derived views are produced by the [`table`](crate::table) and
/// [`fixtures`](crate::fixtures) modules. Missing slugs and ids come back
/// as `None`, never as an error.
///
/// # Examples
///
/// ```
/// let store = sml_league::league();
///
/// let team = store.team_by_slug("sv-robinhood").expect("known club");
/// assert_eq!(team.name, "SV Robinhood");
/// assert!(store.team_by_slug("sv-unknown").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LeagueStore {
    teams: Vec<Team>,
    standings: Vec<Standing>,
    fixtures: Vec<Fixture>,
    players: Vec<Player>,
    articles: Vec<NewsArticle>,
    products: Vec<Product>,
}

impl LeagueStore {
    /// Build a store over the given collections.
    ///
    /// Construction does not check cross-collection consistency; call
    /// [`validate`](Self::validate) to enforce it.
    pub fn new(
        teams: Vec<Team>,
        standings: Vec<Standing>,
        fixtures: Vec<Fixture>,
        players: Vec<Player>,
        articles: Vec<NewsArticle>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            teams,
            standings,
            fixtures,
            players,
            articles,
            products,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn articles(&self) -> &[NewsArticle] {
        &self.articles
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a club by its URL slug.
    #[instrument(skip(self))]
    pub fn team_by_slug(&self, slug: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.slug == slug)
    }

    /// Look up a news article by its URL slug.
    #[instrument(skip(self))]
    pub fn article_by_slug(&self, slug: &str) -> Option<&NewsArticle> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// Look up a shop product by id.
    #[instrument(skip(self))]
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The table entry for a club, if it is ranked this season.
    #[instrument(skip(self))]
    pub fn standing_of_team(&self, team_id: &str) -> Option<&Standing> {
        self.standings.iter().find(|s| s.team.id == team_id)
    }

    /// The club's roster, in squad-list order.
    #[instrument(skip(self))]
    pub fn players_of_team(&self, team_id: &str) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.team_id == team_id)
            .collect()
    }

    /// Articles sharing a category with `article`, the article itself
    /// excluded.
    pub fn related_articles(&self, article: &NewsArticle) -> Vec<&NewsArticle> {
        self.articles
            .iter()
            .filter(|a| a.id != article.id && a.category == article.category)
            .collect()
    }

    /// Distinct article categories, in first-seen order.
    pub fn news_categories(&self) -> Vec<&str> {
        self.articles
            .iter()
            .map(|a| a.category.as_str())
            .unique()
            .collect()
    }

    /// Products flagged for the shop front page.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Check the construction invariants of the collections.
    ///
    /// Standings must form one contiguous table over distinct clubs with
    /// arithmetic that adds up; fixtures must carry scores exactly when
    /// completed, between two distinct sides; players must reference a
    /// known club. A points total that differs from `3*won + drawn` is
    /// only logged, since league point deductions can make it legitimate.
    pub fn validate(&self) -> Result<()> {
        if self.standings.len() != self.teams.len() {
            return Err(LeagueError::InconsistentData(format!(
                "{} standings for {} teams",
                self.standings.len(),
                self.teams.len()
            )));
        }

        let mut positions: Vec<u32> = self.standings.iter().map(|s| s.position).collect();
        positions.sort_unstable();
        let expected: Vec<u32> = (1..=self.standings.len() as u32).collect();
        if positions != expected {
            return Err(LeagueError::InconsistentData(format!(
                "positions {positions:?} are not 1..={}",
                self.standings.len()
            )));
        }

        let ranked_teams = self
            .standings
            .iter()
            .map(|s| s.team.id.as_str())
            .unique()
            .count();
        if ranked_teams != self.standings.len() {
            return Err(LeagueError::InconsistentData(
                "a team appears in more than one standing".to_owned(),
            ));
        }

        for team in &self.teams {
            if team.colors.is_empty() {
                return Err(LeagueError::InconsistentData(format!(
                    "team {} has no brand colors",
                    team.id
                )));
            }
        }
        let team_slugs = self.teams.iter().map(|t| t.slug.as_str()).unique().count();
        if team_slugs != self.teams.len() {
            return Err(LeagueError::InconsistentData(
                "duplicate team slug".to_owned(),
            ));
        }

        for standing in &self.standings {
            if standing.played != standing.won + standing.drawn + standing.lost {
                return Err(LeagueError::InconsistentData(format!(
                    "standing of {}: played {} != {}W + {}D + {}L",
                    standing.team.name,
                    standing.played,
                    standing.won,
                    standing.drawn,
                    standing.lost
                )));
            }
            if standing.goal_difference
                != standing.goals_for as i32 - standing.goals_against as i32
            {
                return Err(LeagueError::InconsistentData(format!(
                    "standing of {}: goal difference {} != {} - {}",
                    standing.team.name,
                    standing.goal_difference,
                    standing.goals_for,
                    standing.goals_against
                )));
            }
            if standing.points != 3 * standing.won + standing.drawn {
                warn!(
                    team = %standing.team.name,
                    points = standing.points,
                    won = standing.won,
                    drawn = standing.drawn,
                    "points total does not match 3*won + drawn"
                );
            }
        }

        for fixture in &self.fixtures {
            if fixture.home.id == fixture.away.id {
                return Err(LeagueError::InconsistentData(format!(
                    "fixture {} has the same club on both sides",
                    fixture.id
                )));
            }
            if fixture.week == 0 {
                return Err(LeagueError::InconsistentData(format!(
                    "fixture {} has week 0",
                    fixture.id
                )));
            }
            let scored = fixture.home_score.is_some() && fixture.away_score.is_some();
            let completed = fixture.status == FixtureStatus::Completed;
            if completed != scored {
                return Err(LeagueError::InconsistentData(format!(
                    "fixture {}: status {} does not agree with score presence",
                    fixture.id, fixture.status
                )));
            }
        }

        for player in &self.players {
            if !self.teams.iter().any(|t| t.id == player.team_id) {
                return Err(LeagueError::InconsistentData(format!(
                    "player {} references unknown team {}",
                    player.id, player.team_id
                )));
            }
        }

        for product in &self.products {
            if product.sizes.is_empty() {
                return Err(LeagueError::InconsistentData(format!(
                    "product {} has no sizes",
                    product.id
                )));
            }
            if product.price < 0.0 {
                return Err(LeagueError::InconsistentData(format!(
                    "product {} has a negative price",
                    product.id
                )));
            }
        }

        Ok(())
    }
}

/// The embedded 2024 season, built once on first use.
pub fn league() -> &'static LeagueStore {
    static LEAGUE: Lazy<LeagueStore> = Lazy::new(season::season_2024);
    &LEAGUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_season_is_consistent() {
        league().validate().expect("embedded season data holds its invariants");
    }

    #[test]
    fn slug_lookup_finds_robinhood() {
        let team = league().team_by_slug("sv-robinhood").unwrap();
        assert_eq!(team.name, "SV Robinhood");
        assert_eq!(team.id, "2");
    }

    #[test]
    fn unknown_slugs_are_absent_not_errors() {
        let store = league();
        assert!(store.team_by_slug("nonexistent").is_none());
        assert!(store.article_by_slug("nonexistent").is_none());
        assert!(store.product_by_id("nonexistent").is_none());
        assert!(store.standing_of_team("99").is_none());
        assert!(store.players_of_team("99").is_empty());
    }

    #[test]
    fn article_lookup_by_slug() {
        let article = league()
            .article_by_slug("inter-moengotapoe-extends-lead")
            .unwrap();
        assert_eq!(article.category, "Match Report");
        assert_eq!(article.author, "John Doe");
    }

    #[test]
    fn product_lookup_by_id() {
        let product = league().product_by_id("shirt-2023-2024").unwrap();
        assert_eq!(product.price, 79.99);
        assert!(product.in_stock);
    }

    #[test]
    fn each_club_has_its_own_roster() {
        let store = league();
        let robinhood = store.players_of_team("2");
        assert_eq!(robinhood.len(), 4);
        assert!(robinhood.iter().any(|p| p.name == "Stefano Rijssel"));

        let inter = store.players_of_team("1");
        assert_eq!(inter.len(), 4);
        assert!(inter.iter().all(|p| p.team_id == "1"));
        assert!(!inter.iter().any(|p| p.name == "Stefano Rijssel"));
    }

    #[test]
    fn standing_lookup_matches_the_table() {
        let standing = league().standing_of_team("1").unwrap();
        assert_eq!(standing.position, 1);
        assert_eq!(standing.points, 44);
    }

    #[test]
    fn related_articles_share_a_category_and_exclude_self() {
        let store = league();
        let article = store
            .article_by_slug("inter-moengotapoe-extends-lead")
            .unwrap();
        let related = store.related_articles(article);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "robinhood-leo-victor-thriller");
        assert!(related.iter().all(|a| a.category == article.category));
    }

    #[test]
    fn categories_come_back_once_in_first_seen_order() {
        assert_eq!(
            league().news_categories(),
            vec!["Match Report", "League News"]
        );
    }

    #[test]
    fn featured_products_filter() {
        let featured = league().featured_products();
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn models_serialize_for_display_consumers() {
        let store = league();
        let team = serde_json::to_value(store.team_by_slug("sv-robinhood").unwrap()).unwrap();
        assert_eq!(team["name"], "SV Robinhood");
        assert_eq!(team["colors"][0], "#FF0000");

        let fixture = serde_json::to_value(&store.fixtures()[4]).unwrap();
        assert_eq!(fixture["home_score"], 3);
        assert_eq!(fixture["status"], "completed");
    }

    #[test]
    fn mismatched_table_size_fails_validation() {
        let store = league();
        let mut teams = store.teams().to_vec();
        teams.pop();
        let broken = LeagueStore::new(
            teams,
            store.standings().to_vec(),
            store.fixtures().to_vec(),
            store.players().to_vec(),
            store.articles().to_vec(),
            store.products().to_vec(),
        );
        assert!(matches!(
            broken.validate(),
            Err(LeagueError::InconsistentData(_))
        ));
    }

    #[test]
    fn score_on_an_upcoming_fixture_fails_validation() {
        let store = league();
        let mut fixtures = store.fixtures().to_vec();
        fixtures[0].home_score = Some(1);
        fixtures[0].away_score = Some(0);
        let broken = LeagueStore::new(
            store.teams().to_vec(),
            store.standings().to_vec(),
            fixtures,
            store.players().to_vec(),
            store.articles().to_vec(),
            store.products().to_vec(),
        );
        assert!(matches!(
            broken.validate(),
            Err(LeagueError::InconsistentData(_))
        ));
    }
}
