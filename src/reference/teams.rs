//! Built-in team directory for the four supported leagues

use crate::bet::Sport;

/// (sport, full name, short name, abbreviation)
pub(super) const TEAMS: &[(Sport, &str, &str, &str)] = &[
    // NFL
    (Sport::Nfl, "New England Patriots", "Patriots", "NE"),
    (Sport::Nfl, "New York Jets", "Jets", "NYJ"),
    (Sport::Nfl, "Miami Dolphins", "Dolphins", "MIA"),
    (Sport::Nfl, "Buffalo Bills", "Bills", "BUF"),
    (Sport::Nfl, "Pittsburgh Steelers", "Steelers", "PIT"),
    (Sport::Nfl, "Baltimore Ravens", "Ravens", "BAL"),
    (Sport::Nfl, "Cleveland Browns", "Browns", "CLE"),
    (Sport::Nfl, "Cincinnati Bengals", "Bengals", "CIN"),
    (Sport::Nfl, "Indianapolis Colts", "Colts", "IND"),
    (Sport::Nfl, "Tennessee Titans", "Titans", "TEN"),
    (Sport::Nfl, "Jacksonville Jaguars", "Jaguars", "JAX"),
    (Sport::Nfl, "Houston Texans", "Texans", "HOU"),
    (Sport::Nfl, "Denver Broncos", "Broncos", "DEN"),
    (Sport::Nfl, "Kansas City Chiefs", "Chiefs", "KC"),
    (Sport::Nfl, "Los Angeles Chargers", "Chargers", "LAC"),
    (Sport::Nfl, "Las Vegas Raiders", "Raiders", "LV"),
    (Sport::Nfl, "Dallas Cowboys", "Cowboys", "DAL"),
    (Sport::Nfl, "Philadelphia Eagles", "Eagles", "PHI"),
    (Sport::Nfl, "New York Giants", "Giants", "NYG"),
    (Sport::Nfl, "Washington Commanders", "Commanders", "WAS"),
    (Sport::Nfl, "Chicago Bears", "Bears", "CHI"),
    (Sport::Nfl, "Green Bay Packers", "Packers", "GB"),
    (Sport::Nfl, "Detroit Lions", "Lions", "DET"),
    (Sport::Nfl, "Minnesota Vikings", "Vikings", "MIN"),
    (Sport::Nfl, "Atlanta Falcons", "Falcons", "ATL"),
    (Sport::Nfl, "New Orleans Saints", "Saints", "NO"),
    (Sport::Nfl, "Carolina Panthers", "Panthers", "CAR"),
    (Sport::Nfl, "Tampa Bay Buccaneers", "Buccaneers", "TB"),
    (Sport::Nfl, "San Francisco 49ers", "49ers", "SF"),
    (Sport::Nfl, "Seattle Seahawks", "Seahawks", "SEA"),
    (Sport::Nfl, "Los Angeles Rams", "Rams", "LAR"),
    (Sport::Nfl, "Arizona Cardinals", "Cardinals", "ARI"),
    // NBA
    (Sport::Nba, "Boston Celtics", "Celtics", "BOS"),
    (Sport::Nba, "Brooklyn Nets", "Nets", "BKN"),
    (Sport::Nba, "New York Knicks", "Knicks", "NYK"),
    (Sport::Nba, "Philadelphia 76ers", "76ers", "PHI"),
    (Sport::Nba, "Toronto Raptors", "Raptors", "TOR"),
    (Sport::Nba, "Chicago Bulls", "Bulls", "CHI"),
    (Sport::Nba, "Cleveland Cavaliers", "Cavaliers", "CLE"),
    (Sport::Nba, "Detroit Pistons", "Pistons", "DET"),
    (Sport::Nba, "Indiana Pacers", "Pacers", "IND"),
    (Sport::Nba, "Milwaukee Bucks", "Bucks", "MIL"),
    (Sport::Nba, "Atlanta Hawks", "Hawks", "ATL"),
    (Sport::Nba, "Charlotte Hornets", "Hornets", "CHA"),
    (Sport::Nba, "Miami Heat", "Heat", "MIA"),
    (Sport::Nba, "Orlando Magic", "Magic", "ORL"),
    (Sport::Nba, "Washington Wizards", "Wizards", "WAS"),
    (Sport::Nba, "Dallas Mavericks", "Mavericks", "DAL"),
    (Sport::Nba, "Houston Rockets", "Rockets", "HOU"),
    (Sport::Nba, "Memphis Grizzlies", "Grizzlies", "MEM"),
    (Sport::Nba, "New Orleans Pelicans", "Pelicans", "NOP"),
    (Sport::Nba, "San Antonio Spurs", "Spurs", "SA"),
    (Sport::Nba, "Denver Nuggets", "Nuggets", "DEN"),
    (Sport::Nba, "Minnesota Timberwolves", "Timberwolves", "MIN"),
    (Sport::Nba, "Oklahoma City Thunder", "Thunder", "OKC"),
    (Sport::Nba, "Portland Trail Blazers", "Trail Blazers", "POR"),
    (Sport::Nba, "Utah Jazz", "Jazz", "UTA"),
    (Sport::Nba, "Golden State Warriors", "Warriors", "GSW"),
    (Sport::Nba, "LA Clippers", "Clippers", "LAC"),
    (Sport::Nba, "Los Angeles Lakers", "Lakers", "LAL"),
    (Sport::Nba, "Phoenix Suns", "Suns", "PHX"),
    (Sport::Nba, "Sacramento Kings", "Kings", "SAC"),
    // MLB
    (Sport::Mlb, "New York Yankees", "Yankees", "NYY"),
    (Sport::Mlb, "Boston Red Sox", "Red Sox", "BOS"),
    (Sport::Mlb, "Tampa Bay Rays", "Rays", "TB"),
    (Sport::Mlb, "Baltimore Orioles", "Orioles", "BAL"),
    (Sport::Mlb, "Toronto Blue Jays", "Blue Jays", "TOR"),
    (Sport::Mlb, "Cleveland Guardians", "Guardians", "CLE"),
    (Sport::Mlb, "Detroit Tigers", "Tigers", "DET"),
    (Sport::Mlb, "Chicago White Sox", "White Sox", "CWS"),
    (Sport::Mlb, "Kansas City Royals", "Royals", "KC"),
    (Sport::Mlb, "Minnesota Twins", "Twins", "MIN"),
    (Sport::Mlb, "Houston Astros", "Astros", "HOU"),
    (Sport::Mlb, "Los Angeles Angels", "Angels", "LAA"),
    (Sport::Mlb, "Oakland Athletics", "Athletics", "OAK"),
    (Sport::Mlb, "Seattle Mariners", "Mariners", "SEA"),
    (Sport::Mlb, "Texas Rangers", "Rangers", "TEX"),
    (Sport::Mlb, "Atlanta Braves", "Braves", "ATL"),
    (Sport::Mlb, "Miami Marlins", "Marlins", "MIA"),
    (Sport::Mlb, "New York Mets", "Mets", "NYM"),
    (Sport::Mlb, "Philadelphia Phillies", "Phillies", "PHI"),
    (Sport::Mlb, "Washington Nationals", "Nationals", "WSH"),
    (Sport::Mlb, "Chicago Cubs", "Cubs", "CHC"),
    (Sport::Mlb, "Cincinnati Reds", "Reds", "CIN"),
    (Sport::Mlb, "Milwaukee Brewers", "Brewers", "MIL"),
    (Sport::Mlb, "Pittsburgh Pirates", "Pirates", "PIT"),
    (Sport::Mlb, "St. Louis Cardinals", "Cardinals", "STL"),
    (Sport::Mlb, "Arizona Diamondbacks", "Diamondbacks", "ARI"),
    (Sport::Mlb, "Colorado Rockies", "Rockies", "COL"),
    (Sport::Mlb, "Los Angeles Dodgers", "Dodgers", "LAD"),
    (Sport::Mlb, "San Diego Padres", "Padres", "SD"),
    (Sport::Mlb, "San Francisco Giants", "Giants", "SF"),
    // NHL
    (Sport::Nhl, "Boston Bruins", "Bruins", "BOS"),
    (Sport::Nhl, "Buffalo Sabres", "Sabres", "BUF"),
    (Sport::Nhl, "Detroit Red Wings", "Red Wings", "DET"),
    (Sport::Nhl, "Florida Panthers", "Panthers", "FLA"),
    (Sport::Nhl, "Montreal Canadiens", "Canadiens", "MTL"),
    (Sport::Nhl, "Ottawa Senators", "Senators", "OTT"),
    (Sport::Nhl, "Tampa Bay Lightning", "Lightning", "TB"),
    (Sport::Nhl, "Toronto Maple Leafs", "Maple Leafs", "TOR"),
    (Sport::Nhl, "Carolina Hurricanes", "Hurricanes", "CAR"),
    (Sport::Nhl, "Columbus Blue Jackets", "Blue Jackets", "CBJ"),
    (Sport::Nhl, "New Jersey Devils", "Devils", "NJ"),
    (Sport::Nhl, "New York Islanders", "Islanders", "NYI"),
    (Sport::Nhl, "New York Rangers", "Rangers", "NYR"),
    (Sport::Nhl, "Philadelphia Flyers", "Flyers", "PHI"),
    (Sport::Nhl, "Pittsburgh Penguins", "Penguins", "PIT"),
    (Sport::Nhl, "Washington Capitals", "Capitals", "WSH"),
    (Sport::Nhl, "Chicago Blackhawks", "Blackhawks", "CHI"),
    (Sport::Nhl, "Colorado Avalanche", "Avalanche", "COL"),
    (Sport::Nhl, "Dallas Stars", "Stars", "DAL"),
    (Sport::Nhl, "Minnesota Wild", "Wild", "MIN"),
    (Sport::Nhl, "Nashville Predators", "Predators", "NSH"),
    (Sport::Nhl, "St. Louis Blues", "Blues", "STL"),
    (Sport::Nhl, "Winnipeg Jets", "Jets", "WPG"),
    (Sport::Nhl, "Anaheim Ducks", "Ducks", "ANA"),
    (Sport::Nhl, "Calgary Flames", "Flames", "CGY"),
    (Sport::Nhl, "Edmonton Oilers", "Oilers", "EDM"),
    (Sport::Nhl, "Los Angeles Kings", "Kings", "LAK"),
    (Sport::Nhl, "San Jose Sharks", "Sharks", "SJ"),
    (Sport::Nhl, "Seattle Kraken", "Kraken", "SEA"),
    (Sport::Nhl, "Vancouver Canucks", "Canucks", "VAN"),
    (Sport::Nhl, "Vegas Golden Knights", "Golden Knights", "VGK"),
];

/// Nicknames and alternate spellings seen on bet slips
pub(super) const NICKNAMES: &[(Sport, &str, &str)] = &[
    (Sport::Nfl, "niners", "49ers"),
    (Sport::Nfl, "bucs", "Buccaneers"),
    (Sport::Nfl, "pats", "Patriots"),
    (Sport::Nfl, "jags", "Jaguars"),
    (Sport::Nfl, "washington football team", "Commanders"),
    (Sport::Nfl, "wsh", "Commanders"),
    (Sport::Nfl, "la rams", "Rams"),
    (Sport::Nfl, "la chargers", "Chargers"),
    (Sport::Nfl, "ny giants", "Giants"),
    (Sport::Nfl, "ny jets", "Jets"),
    (Sport::Nba, "sixers", "76ers"),
    (Sport::Nba, "cavs", "Cavaliers"),
    (Sport::Nba, "mavs", "Mavericks"),
    (Sport::Nba, "wolves", "Timberwolves"),
    (Sport::Nba, "blazers", "Trail Blazers"),
    (Sport::Nba, "la lakers", "Lakers"),
    (Sport::Nba, "gs", "Warriors"),
    (Sport::Nba, "ny", "Knicks"),
    (Sport::Nba, "no", "Pelicans"),
    (Sport::Nba, "sas", "Spurs"),
    (Sport::Nba, "utah", "Jazz"),
    (Sport::Nba, "wsh", "Wizards"),
    (Sport::Mlb, "chw", "White Sox"),
    (Sport::Mlb, "a's", "Athletics"),
    (Sport::Mlb, "yanks", "Yankees"),
    (Sport::Mlb, "d-backs", "Diamondbacks"),
    (Sport::Mlb, "dbacks", "Diamondbacks"),
    (Sport::Mlb, "o's", "Orioles"),
    (Sport::Nhl, "la", "Kings"),
    (Sport::Nhl, "vgs", "Golden Knights"),
    (Sport::Nhl, "vegas", "Golden Knights"),
    (Sport::Nhl, "habs", "Canadiens"),
    (Sport::Nhl, "leafs", "Maple Leafs"),
    (Sport::Nhl, "bolts", "Lightning"),
    (Sport::Nhl, "caps", "Capitals"),
];
