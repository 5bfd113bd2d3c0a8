//! The embedded 2024 season.
//!
//! One fixed dataset, assembled once behind [`crate::league`]. Team rows
//! are built first and copied into standings and fixtures, so the copies
//! can never drift from the catalog.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{
    Fixture, FixtureStatus, FormResult, NewsArticle, Player, Product, Standing, Team,
};
use crate::store::LeagueStore;

const STADIUM: &str = "Dr. Ir. Franklin Essed Stadion";

fn team(id: &str, name: &str, slug: &str, crest: &str, founded: u16, colors: &[&str]) -> Team {
    Team {
        id: id.to_owned(),
        name: name.to_owned(),
        slug: slug.to_owned(),
        crest: crest.to_owned(),
        founded,
        stadium: STADIUM.to_owned(),
        capacity: 3500,
        colors: colors.iter().map(|c| (*c).to_owned()).collect(),
    }
}

fn player(
    id: &str,
    team_id: &str,
    name: &str,
    position: &str,
    number: u8,
    age: u8,
    stats: Option<(u32, u32)>,
) -> Player {
    Player {
        id: id.to_owned(),
        team_id: team_id.to_owned(),
        name: name.to_owned(),
        position: position.to_owned(),
        number,
        nationality: "Suriname".to_owned(),
        age,
        goals: stats.map(|(goals, _)| goals),
        assists: stats.map(|(_, assists)| assists),
    }
}

fn kickoff(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("kickoff literals are valid dates")
}

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).expect("date literals are valid")
}

pub(crate) fn season_2024() -> LeagueStore {
    use FormResult::{Draw, Loss, Win};

    let inter = team(
        "1",
        "Inter Moengotapoe",
        "inter-moengotapoe",
        "🏆",
        1962,
        &["#3E8C21", "#FFFFFF"],
    );
    let robinhood = team(
        "2",
        "SV Robinhood",
        "sv-robinhood",
        "🦅",
        1945,
        &["#FF0000", "#FFFFFF"],
    );
    let leo_victor = team(
        "3",
        "SV Leo Victor",
        "sv-leo-victor",
        "🦁",
        1952,
        &["#0000FF", "#FFFFFF"],
    );
    let nacional = team(
        "4",
        "FCS Nacional",
        "fcs-nacional",
        "⚡",
        1959,
        &["#FFD700", "#000000"],
    );
    let walking_boyz = team(
        "5",
        "Walking Boyz Company",
        "walking-boyz-company",
        "🚶",
        2004,
        &["#93D70E", "#000000"],
    );
    let snl = team("6", "SNL", "snl", "⭐", 1921, &["#800080", "#FFFFFF"]);
    let transvaal = team(
        "7",
        "Transvaal",
        "transvaal",
        "🔵",
        1921,
        &["#00BFFF", "#FFFFFF"],
    );
    let notch = team("8", "Notch", "notch", "🎯", 2015, &["#FF6600", "#000000"]);

    let standings = vec![
        Standing {
            position: 1,
            team: inter.clone(),
            played: 18,
            won: 14,
            drawn: 2,
            lost: 2,
            goals_for: 42,
            goals_against: 15,
            goal_difference: 27,
            points: 44,
            form: vec![Win, Win, Draw, Win, Win],
        },
        Standing {
            position: 2,
            team: robinhood.clone(),
            played: 18,
            won: 12,
            drawn: 4,
            lost: 2,
            goals_for: 38,
            goals_against: 18,
            goal_difference: 20,
            points: 40,
            form: vec![Win, Draw, Win, Win, Draw],
        },
        Standing {
            position: 3,
            team: leo_victor.clone(),
            played: 18,
            won: 11,
            drawn: 3,
            lost: 4,
            goals_for: 35,
            goals_against: 22,
            goal_difference: 13,
            points: 36,
            form: vec![Loss, Win, Win, Draw, Win],
        },
        Standing {
            position: 4,
            team: nacional.clone(),
            played: 18,
            won: 9,
            drawn: 5,
            lost: 4,
            goals_for: 30,
            goals_against: 25,
            goal_difference: 5,
            points: 32,
            form: vec![Draw, Win, Loss, Draw, Win],
        },
        Standing {
            position: 5,
            team: walking_boyz.clone(),
            played: 18,
            won: 7,
            drawn: 6,
            lost: 5,
            goals_for: 28,
            goals_against: 26,
            goal_difference: 2,
            points: 27,
            form: vec![Draw, Draw, Win, Loss, Draw],
        },
        Standing {
            position: 6,
            team: snl.clone(),
            played: 18,
            won: 6,
            drawn: 4,
            lost: 8,
            goals_for: 24,
            goals_against: 30,
            goal_difference: -6,
            points: 22,
            form: vec![Loss, Win, Loss, Draw, Loss],
        },
        Standing {
            position: 7,
            team: transvaal.clone(),
            played: 18,
            won: 4,
            drawn: 5,
            lost: 9,
            goals_for: 20,
            goals_against: 35,
            goal_difference: -15,
            points: 17,
            form: vec![Loss, Draw, Loss, Loss, Win],
        },
        Standing {
            position: 8,
            team: notch.clone(),
            played: 18,
            won: 2,
            drawn: 3,
            lost: 13,
            goals_for: 15,
            goals_against: 41,
            goal_difference: -26,
            points: 9,
            form: vec![Loss, Loss, Draw, Loss, Loss],
        },
    ];

    let fixtures = vec![
        Fixture {
            id: "1".to_owned(),
            home: inter.clone(),
            away: robinhood.clone(),
            home_score: None,
            away_score: None,
            kickoff: kickoff(2024, 11, 5, 19),
            venue: STADIUM.to_owned(),
            status: FixtureStatus::Upcoming,
            week: 19,
        },
        Fixture {
            id: "2".to_owned(),
            home: leo_victor.clone(),
            away: nacional.clone(),
            home_score: None,
            away_score: None,
            kickoff: kickoff(2024, 11, 5, 16),
            venue: STADIUM.to_owned(),
            status: FixtureStatus::Upcoming,
            week: 19,
        },
        Fixture {
            id: "3".to_owned(),
            home: walking_boyz.clone(),
            away: snl.clone(),
            home_score: None,
            away_score: None,
            kickoff: kickoff(2024, 11, 6, 19),
            venue: STADIUM.to_owned(),
            status: FixtureStatus::Upcoming,
            week: 19,
        },
        Fixture {
            id: "4".to_owned(),
            home: transvaal.clone(),
            away: notch.clone(),
            home_score: None,
            away_score: None,
            kickoff: kickoff(2024, 11, 6, 16),
            venue: STADIUM.to_owned(),
            status: FixtureStatus::Upcoming,
            week: 19,
        },
        Fixture {
            id: "5".to_owned(),
            home: inter.clone(),
            away: nacional.clone(),
            home_score: Some(3),
            away_score: Some(1),
            kickoff: kickoff(2024, 10, 28, 19),
            venue: STADIUM.to_owned(),
            status: FixtureStatus::Completed,
            week: 18,
        },
        Fixture {
            id: "6".to_owned(),
            home: robinhood.clone(),
            away: leo_victor.clone(),
            home_score: Some(2),
            away_score: Some(2),
            kickoff: kickoff(2024, 10, 28, 16),
            venue: STADIUM.to_owned(),
            status: FixtureStatus::Completed,
            week: 18,
        },
        Fixture {
            id: "7".to_owned(),
            home: walking_boyz.clone(),
            away: notch.clone(),
            home_score: Some(1),
            away_score: Some(0),
            kickoff: kickoff(2024, 10, 29, 19),
            venue: STADIUM.to_owned(),
            status: FixtureStatus::Completed,
            week: 18,
        },
        Fixture {
            id: "8".to_owned(),
            home: snl.clone(),
            away: transvaal.clone(),
            home_score: Some(0),
            away_score: Some(2),
            kickoff: kickoff(2024, 10, 29, 16),
            venue: STADIUM.to_owned(),
            status: FixtureStatus::Completed,
            week: 18,
        },
    ];

    let players = vec![
        player("1", "1", "Marvin Pinas", "Goalkeeper", 1, 31, Some((0, 0))),
        player("2", "1", "Clifton Sandvliet", "Defender", 4, 29, Some((1, 0))),
        player("3", "1", "Romeo Kastiel", "Midfielder", 8, 24, Some((6, 9))),
        player("4", "1", "Renzo Akrosie", "Forward", 9, 27, Some((17, 4))),
        player("5", "2", "Warner Hahn", "Goalkeeper", 1, 32, Some((0, 0))),
        player("6", "2", "Myenty Abena", "Defender", 4, 30, Some((2, 1))),
        player("7", "2", "Gleofilo Vlijter", "Midfielder", 10, 28, Some((8, 12))),
        player("8", "2", "Stefano Rijssel", "Forward", 9, 26, Some((15, 7))),
        player("9", "3", "Dion Etnel", "Goalkeeper", 1, 25, Some((0, 0))),
        player("10", "3", "Jurmen Vorswijk", "Defender", 3, 28, None),
        player("11", "3", "Giovanni Waal", "Midfielder", 6, 22, Some((4, 6))),
        player("12", "3", "Damian Menig", "Forward", 11, 23, Some((11, 3))),
        player("13", "4", "Quincy Amatredjo", "Goalkeeper", 1, 27, Some((0, 0))),
        player("14", "4", "Ivanildo Plein", "Defender", 2, 26, Some((0, 2))),
        player("15", "4", "Ridgeciano Resodimedjo", "Midfielder", 8, 21, Some((5, 5))),
        player("16", "4", "Jamilho Rigters", "Forward", 7, 25, Some((9, 2))),
        player("17", "5", "Kelvin Sastrodimedjo", "Goalkeeper", 1, 30, Some((0, 0))),
        player("18", "5", "Roscello Mijnals", "Defender", 5, 33, Some((1, 0))),
        player("19", "5", "Dimitri Apai", "Midfielder", 10, 24, None),
        player("20", "5", "Gregory Sordam", "Forward", 9, 29, Some((10, 5))),
        player("21", "6", "Jethro Kasanpawiro", "Goalkeeper", 1, 23, Some((0, 0))),
        player("22", "6", "Virgil Kartodikromo", "Defender", 6, 31, Some((0, 1))),
        player("23", "6", "Sergino Eiflaar", "Midfielder", 8, 26, Some((3, 4))),
        player("24", "6", "Diego Waterberg", "Forward", 11, 20, Some((8, 1))),
        player("25", "7", "Orpheo Struiken", "Goalkeeper", 1, 34, Some((0, 0))),
        player("26", "7", "Kenneth Esajas", "Defender", 2, 27, None),
        player("27", "7", "Shayne Wongsodikromo", "Midfielder", 7, 22, Some((2, 3))),
        player("28", "7", "Jeredy Zinhagel", "Forward", 9, 24, Some((7, 2))),
        player("29", "8", "Fabian Karsters", "Goalkeeper", 1, 28, Some((0, 0))),
        player("30", "8", "Stefan Purperhart", "Defender", 5, 25, Some((1, 1))),
        player("31", "8", "Joël Monsels", "Midfielder", 10, 19, None),
        player("32", "8", "Ulrich Landveld", "Forward", 9, 26, Some((6, 0))),
    ];

    let articles = vec![
        NewsArticle {
            id: "1".to_owned(),
            slug: "inter-moengotapoe-extends-lead".to_owned(),
            title: "Inter Moengotapoe Extends Lead at Top with Convincing Victory".to_owned(),
            excerpt: "The league leaders showcased their dominance with a 3-1 win over FCS \
                      Nacional, extending their lead to four points."
                .to_owned(),
            body: "Inter Moengotapoe continued their impressive form with a commanding 3-1 \
                   victory over FCS Nacional at the Dr. Ir. Franklin Essed Stadion. The win \
                   extends their lead at the top of the table to four points..."
                .to_owned(),
            image: "https://images.unsplash.com/photo-1579952363873-27f3bade9f55?w=800&q=80"
                .to_owned(),
            author: "John Doe".to_owned(),
            published: day(2024, 10, 29),
            category: "Match Report".to_owned(),
        },
        NewsArticle {
            id: "2".to_owned(),
            slug: "robinhood-leo-victor-thriller".to_owned(),
            title: "Robinhood and Leo Victor Share Points in Six-Goal Thriller".to_owned(),
            excerpt: "An entertaining 2-2 draw between two title contenders kept fans on the \
                      edge of their seats."
                .to_owned(),
            body: "SV Robinhood and SV Leo Victor played out an exciting 2-2 draw in what was \
                   one of the matches of the season. Both teams showed attacking intent from \
                   the start..."
                .to_owned(),
            image: "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=800&q=80"
                .to_owned(),
            author: "Jane Smith".to_owned(),
            published: day(2024, 10, 29),
            category: "Match Report".to_owned(),
        },
        NewsArticle {
            id: "3".to_owned(),
            slug: "sml-announces-youth-development".to_owned(),
            title: "SML Announces New Youth Development Program".to_owned(),
            excerpt: "The league unveils ambitious plans to nurture young Surinamese talent \
                      through a comprehensive youth academy system."
                .to_owned(),
            body: "The Suriname Major League has announced a groundbreaking youth development \
                   program aimed at identifying and nurturing young football talent across \
                   the country..."
                .to_owned(),
            image: "https://images.unsplash.com/photo-1431324155629-1a6deb1dec8d?w=800&q=80"
                .to_owned(),
            author: "Michael Johnson".to_owned(),
            published: day(2024, 10, 27),
            category: "League News".to_owned(),
        },
    ];

    let products = vec![
        Product {
            id: "shirt-2023-2024".to_owned(),
            name: "SML Home Jersey 2023-2024".to_owned(),
            description: "Official Surinamese Voetbalbond home jersey for the 2023-2024 \
                          season. Features the iconic red and green stripes with the national \
                          emblem and gold star. Made with premium moisture-wicking fabric for \
                          optimal comfort and performance."
                .to_owned(),
            price: 79.99,
            image: "/shirt_2023-2024.jpg".to_owned(),
            category: "Jerseys".to_owned(),
            sizes: ["XS", "S", "M", "L", "XL", "XXL"]
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            colors: Some(vec!["White/Red/Green".to_owned()]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: "shirt-2024-2025".to_owned(),
            name: "SML Home Jersey 2024-2025".to_owned(),
            description: "The latest official Surinamese Voetbalbond home jersey for the \
                          2024-2025 season. Showcasing a modern design with dynamic red and \
                          green accents, featuring the national emblem and gold star. \
                          Engineered with advanced breathable fabric technology."
                .to_owned(),
            price: 89.99,
            image: "/shirt_2024-2025.png".to_owned(),
            category: "Jerseys".to_owned(),
            sizes: ["XS", "S", "M", "L", "XL", "XXL"]
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            colors: Some(vec!["White/Red/Green".to_owned()]),
            in_stock: true,
            featured: true,
        },
    ];

    let teams = vec![
        inter,
        robinhood,
        leo_victor,
        nacional,
        walking_boyz,
        snl,
        transvaal,
        notch,
    ];

    LeagueStore::new(teams, standings, fixtures, players, articles, products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_has_the_expected_shape() {
        let store = season_2024();
        assert_eq!(store.teams().len(), 8);
        assert_eq!(store.standings().len(), 8);
        assert_eq!(store.fixtures().len(), 8);
        assert_eq!(store.players().len(), 32);
        assert_eq!(store.articles().len(), 3);
        assert_eq!(store.products().len(), 2);
    }

    #[test]
    fn every_points_total_matches_the_three_point_rule() {
        // No deductions were applied in 2024, so the stored totals line up
        // with the derivation even though they are not derived.
        for standing in season_2024().standings() {
            assert_eq!(standing.points, 3 * standing.won + standing.drawn);
        }
    }

    #[test]
    fn kickoffs_carry_date_and_time() {
        let store = season_2024();
        let first = &store.fixtures()[0];
        assert_eq!(first.kickoff, kickoff(2024, 11, 5, 19));
        assert_eq!(first.kickoff.format("%H:%M").to_string(), "19:00");
    }
}
