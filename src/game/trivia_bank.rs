//! Basketball trivia question bank.

#[derive(Clone, Debug, PartialEq)]
pub struct TriviaQuestion {
    pub question: &'static str,
    pub answers: &'static [&'static str],
    /// Index into `answers`.
    pub correct: usize,
}

const fn q(
    question: &'static str,
    answers: &'static [&'static str],
    correct: usize,
) -> TriviaQuestion {
    TriviaQuestion { question, answers, correct }
}

pub const TRIVIA_QUESTIONS: &[TriviaQuestion] = &[
    q(
        "Who invented basketball?",
        &["James Naismith", "Walter Camp", "Abner Doubleday", "William Morgan"],
        0,
    ),
    q("In what year was basketball invented?", &["1871", "1891", "1911", "1931"], 1),
    q(
        "How many points did Wilt Chamberlain score in his record single game?",
        &["81", "92", "100", "73"],
        2,
    ),
    q(
        "How far is the free-throw line from the basket?",
        &["12 feet", "13 feet", "15 feet", "18 feet"],
        2,
    ),
    q(
        "How long is a regulation NBA court?",
        &["84 feet", "90 feet", "94 feet", "100 feet"],
        2,
    ),
    q(
        "Which player won 11 NBA championships?",
        &["Bill Russell", "Sam Jones", "Michael Jordan", "Robert Horry"],
        0,
    ),
    q(
        "In what year was the NBA shot clock introduced?",
        &["1946", "1954", "1967", "1979"],
        1,
    ),
    q("How many seconds is the NBA shot clock?", &["20", "24", "30", "35"], 1),
    q(
        "How many NBA Finals did Michael Jordan win with the Bulls?",
        &["4", "5", "6", "7"],
        2,
    ),
    q(
        "What is the name of the NBA championship trophy?",
        &["Stanley Cup", "Larry O'Brien Trophy", "Naismith Trophy", "Vince Lombardi Trophy"],
        1,
    ),
    q(
        "Who holds the NBA record for career assists?",
        &["Magic Johnson", "Chris Paul", "Jason Kidd", "John Stockton"],
        3,
    ),
    q(
        "What is a triple-double?",
        &[
            "Three made threes in a row",
            "Double digits in three stat categories",
            "Scoring 30 points in a half",
            "Three straight wins by 20+",
        ],
        1,
    ),
    q(
        "How many players per team are on the court at once?",
        &["4", "5", "6", "7"],
        1,
    ),
    q(
        "How far is the NBA three-point line at the top of the arc?",
        &["20.75 feet", "22 feet", "23.75 feet", "25 feet"],
        2,
    ),
    q(
        "What was the NBA originally called in 1946?",
        &[
            "National Basketball League",
            "American Basketball League",
            "Basketball Association of America",
            "United Basketball Association",
        ],
        2,
    ),
    q(
        "What is the rectangular area under each basket called?",
        &["The circle", "The paint", "The wing", "The slot"],
        1,
    ),
    q(
        "How many quarters are played in an NBA game?",
        &["2", "3", "4", "6"],
        2,
    ),
    q(
        "How long is an NBA quarter?",
        &["10 minutes", "12 minutes", "15 minutes", "20 minutes"],
        1,
    ),
    q(
        "What is the height of a regulation basketball rim?",
        &["9 feet", "10 feet", "11 feet", "12 feet"],
        1,
    ),
    q(
        "How many personal fouls foul a player out of an NBA game?",
        &["4", "5", "6", "7"],
        2,
    ),
    q(
        "Which team did Kobe Bryant play his entire NBA career for?",
        &["Los Angeles Lakers", "Boston Celtics", "Chicago Bulls", "New York Knicks"],
        0,
    ),
    q(
        "Who passed Kareem Abdul-Jabbar as the NBA's all-time leading scorer in 2023?",
        &["Karl Malone", "LeBron James", "Kobe Bryant", "Kevin Durant"],
        1,
    ),
    q(
        "Which college did Michael Jordan attend?",
        &["Duke", "Kentucky", "North Carolina", "Kansas"],
        2,
    ),
    q(
        "Which jersey number did Michael Jordan wear for most of his career?",
        &["23", "33", "32", "45"],
        0,
    ),
    q(
        "Taking too many steps without dribbling is called what?",
        &["Double dribble", "Traveling", "Carrying", "Goaltending"],
        1,
    ),
    q(
        "Touching the ball on its way down toward the basket is called what?",
        &["Traveling", "Charging", "Goaltending", "Backcourt"],
        2,
    ),
    q(
        "How many seconds may an offensive player stay in the paint?",
        &["3", "5", "8", "10"],
        0,
    ),
    q(
        "How many seconds does an NBA team have to cross half court?",
        &["5", "8", "10", "24"],
        1,
    ),
    q(
        "How many points is a made free throw worth?",
        &["1", "2", "3", "4"],
        0,
    ),
    q(
        "In which season did the NBA adopt the three-point line?",
        &["1967-68", "1979-80", "1984-85", "1994-95"],
        1,
    ),
    q(
        "Which player is nicknamed \"The Greek Freak\"?",
        &["Giannis Antetokounmpo", "Nikola Jokic", "Luka Doncic", "Dirk Nowitzki"],
        0,
    ),
    q(
        "Which player was nicknamed \"The Mailman\"?",
        &["Karl Malone", "Moses Malone", "John Stockton", "Charles Barkley"],
        0,
    ),
    q(
        "What is Magic Johnson's real first name?",
        &["Earvin", "Marcus", "Michael", "Lamar"],
        0,
    ),
    q(
        "Which team drafted LeBron James first overall in 2003?",
        &["Miami Heat", "Cleveland Cavaliers", "Los Angeles Lakers", "New York Knicks"],
        1,
    ),
    q(
        "Which team has Stephen Curry played his whole NBA career for?",
        &["Golden State Warriors", "Charlotte Hornets", "Houston Rockets", "Phoenix Suns"],
        0,
    ),
    q(
        "Before Oklahoma City, the Thunder franchise played in which city?",
        &["Vancouver", "Seattle", "Kansas City", "San Diego"],
        1,
    ),
    q(
        "Which country is Dirk Nowitzki from?",
        &["Germany", "Serbia", "Spain", "Lithuania"],
        0,
    ),
    q(
        "Which country is Nikola Jokic from?",
        &["Croatia", "Serbia", "Slovenia", "Greece"],
        1,
    ),
    q(
        "Which country is Yao Ming from?",
        &["Japan", "South Korea", "China", "Philippines"],
        2,
    ),
    q(
        "Whose silhouette is widely said to be the NBA logo?",
        &["Jerry West", "Bob Cousy", "Oscar Robertson", "Elgin Baylor"],
        0,
    ),
    q(
        "Who first averaged a triple-double over a full NBA season?",
        &["Oscar Robertson", "Russell Westbrook", "Magic Johnson", "Wilt Chamberlain"],
        0,
    ),
    q(
        "How many teams are in the NBA?",
        &["28", "29", "30", "32"],
        2,
    ),
    q(
        "In which city was basketball invented?",
        &["Boston", "Springfield", "Chicago", "New York"],
        1,
    ),
    q(
        "What did James Naismith use as the first hoops?",
        &["Peach baskets", "Barrels", "Milk crates", "Iron rings"],
        0,
    ),
    q(
        "Which team won 73 regular-season games in 2015-16?",
        &["Chicago Bulls", "Golden State Warriors", "Boston Celtics", "Los Angeles Lakers"],
        1,
    ),
    q(
        "Which team went 72-10 in the 1995-96 season?",
        &["Chicago Bulls", "Los Angeles Lakers", "Boston Celtics", "San Antonio Spurs"],
        0,
    ),
    q(
        "Which head coach won 11 NBA championships?",
        &["Phil Jackson", "Red Auerbach", "Gregg Popovich", "Pat Riley"],
        0,
    ),
    q(
        "Who hit \"The Shot\" over Craig Ehlo in the 1989 playoffs?",
        &["Michael Jordan", "Larry Bird", "Magic Johnson", "Reggie Miller"],
        0,
    ),
    q(
        "Who scored 81 points in a single game in 2006?",
        &["Kobe Bryant", "LeBron James", "Carmelo Anthony", "Allen Iverson"],
        0,
    ),
    q(
        "Which team did Tim Duncan play his entire career for?",
        &["San Antonio Spurs", "Houston Rockets", "Dallas Mavericks", "Utah Jazz"],
        0,
    ),
    q(
        "Which position usually brings the ball up the court?",
        &["Center", "Point guard", "Power forward", "Small forward"],
        1,
    ),
    q(
        "How many players per side are on the court in 3x3 basketball?",
        &["2", "3", "4", "5"],
        1,
    ),
    q(
        "At which Olympics did the original \"Dream Team\" play?",
        &["Seoul 1988", "Barcelona 1992", "Atlanta 1996", "Sydney 2000"],
        1,
    ),
    q(
        "Who was the first unanimous NBA MVP, in 2016?",
        &["Stephen Curry", "LeBron James", "Kevin Durant", "James Harden"],
        0,
    ),
    q(
        "What does WNBA stand for?",
        &[
            "Women's National Basketball Association",
            "World National Basketball Association",
            "Western National Basketball Alliance",
            "Women's North Basketball Association",
        ],
        0,
    ),
    q(
        "Which player was nicknamed \"The Answer\"?",
        &["Allen Iverson", "Tracy McGrady", "Vince Carter", "Paul Pierce"],
        0,
    ),
    q(
        "Shaquille O'Neal won his first three titles with which team?",
        &["Los Angeles Lakers", "Orlando Magic", "Miami Heat", "Boston Celtics"],
        0,
    ),
    q(
        "A shot that drops without touching rim or backboard is called what?",
        &["Swish", "Brick", "Airball", "Bank shot"],
        0,
    ),
    q(
        "A shot that misses the rim and backboard entirely is called what?",
        &["Airball", "Brick", "Swish", "Putback"],
        0,
    ),
    q(
        "How long is each half of an NCAA men's game?",
        &["16 minutes", "20 minutes", "24 minutes", "12 minutes"],
        1,
    ),
    q(
        "How many regular-season games does each NBA team play?",
        &["72", "82", "88", "92"],
        1,
    ),
    q(
        "What is the inside diameter of a regulation rim?",
        &["16 inches", "18 inches", "20 inches", "22 inches"],
        1,
    ),
    q(
        "What is basketball's Hall of Fame named after?",
        &["James Naismith", "John Wooden", "Red Auerbach", "Wilt Chamberlain"],
        0,
    ),
    q(
        "Which franchise is tied with the Lakers for the most NBA titles?",
        &["Boston Celtics", "Chicago Bulls", "Golden State Warriors", "San Antonio Spurs"],
        0,
    ),
    q(
        "Which player was known as \"Larry Legend\"?",
        &["Larry Bird", "Larry Johnson", "Larry Nance", "Larry Brown"],
        0,
    ),
    q(
        "Running into a set defender with the ball is called what?",
        &["Blocking", "Charging", "Hand-checking", "Reaching"],
        1,
    ),
    q(
        "Dribbling with both hands at once is called what?",
        &["Traveling", "Double dribble", "Carrying", "Backcourt violation"],
        1,
    ),
    q(
        "How many timeouts does each NBA team get per game?",
        &["5", "6", "7", "8"],
        2,
    ),
];
