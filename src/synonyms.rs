// =============================================================================
// synonyms.rs — WHAT PEOPLE WRITE vs. WHAT MARKETS ARE CALLED
// =============================================================================
//
// Nobody tweets "Federal Reserve interest rate decision". They tweet "powell
// blinked". The synonym table bridges the two: a canonical lowercase term
// maps to an ordered list of related lowercase terms that count as a softer
// hit when the term itself is missing from the post.
//
// Two rules that are easy to break by accident:
//
// - The relation is NOT symmetric. "gta" lists "rockstar", and "rockstar"
//   happens to list "gta" back, but "doge" lists "crypto" while "crypto"
//   lists nothing. Symmetrizing the table changes matching behavior.
// - Expansion is one level deep. Synonyms of synonyms are never followed.
//
// The table is built once and shared read-only. Changing it means shipping
// a new table, not mutating this one.
// =============================================================================

use std::collections::HashMap;

/// Canonical term → related terms, one level deep, asymmetric.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Build from `(term, related)` pairs. Terms and related terms are
    /// lowercased. A repeated term replaces the earlier entry.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let entries = pairs
            .into_iter()
            .map(|(term, related)| {
                (
                    term.to_lowercase(),
                    related.iter().map(|r| r.to_lowercase()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// The shipped table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_SYNONYMS.iter().copied())
    }

    /// Related terms for `term`, in table order. Empty when the term has no
    /// entry.
    pub fn related(&self, term: &str) -> &[String] {
        self.entries.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    // Central bank and monetary policy
    ("fed", &["federal reserve", "fomc", "interest rates"]),
    ("federal reserve", &["fed", "fomc", "interest rates"]),
    ("fomc", &["fed", "federal reserve", "interest rates"]),
    ("jerome powell", &["fed", "federal reserve", "fomc"]),
    ("powell", &["fed", "federal reserve", "fomc"]),
    ("janet yellen", &["treasury", "fiscal policy"]),
    ("yellen", &["treasury", "fiscal policy"]),
    ("rate hike", &["interest rates", "fed", "fomc"]),
    ("rate cut", &["interest rates", "fed", "fomc"]),
    ("interest rate", &["fed", "fomc", "monetary policy"]),
    ("basis points", &["interest rates", "rate hike", "rate cut"]),
    ("bps", &["basis points", "interest rates"]),
    ("dot plot", &["fomc", "fed", "interest rates"]),
    ("quantitative easing", &["fed", "monetary policy"]),
    ("qe", &["quantitative easing", "fed"]),

    // Macro data releases and indices
    ("cpi", &["inflation", "consumer price index"]),
    ("inflation", &["cpi", "consumer price index", "cost of living"]),
    ("pce", &["inflation", "consumer spending"]),
    ("gdp", &["economic growth", "recession"]),
    ("recession", &["gdp", "economic downturn", "contraction"]),
    ("unemployment", &["jobs", "labor market", "payrolls", "jobless"]),
    ("nfp", &["nonfarm payrolls", "jobs", "unemployment"]),
    ("nonfarm payrolls", &["jobs", "unemployment", "labor market"]),
    ("payrolls", &["jobs", "unemployment", "labor market"]),
    ("layoffs", &["unemployment", "jobs", "labor market"]),
    ("sp500", &["s&p 500", "stocks", "equities"]),
    ("s&p 500", &["sp500", "stocks", "equities"]),
    ("s&p", &["sp500", "s&p 500", "stocks"]),
    ("nasdaq", &["stocks", "equities", "tech stocks"]),
    ("dow", &["stocks", "equities", "dow jones"]),
    ("dow jones", &["dow", "stocks", "equities"]),
    ("yield curve", &["bonds", "treasuries", "interest rates"]),
    ("treasuries", &["bonds", "yield curve", "interest rates"]),

    // US politics
    ("potus", &["president", "white house"]),
    ("white house", &["president", "administration"]),
    ("gop", &["republican", "republicans"]),
    ("rnc", &["republican", "republicans"]),
    ("dnc", &["democrat", "democrats"]),
    ("doge", &["spending cuts", "government efficiency", "dogecoin", "crypto", "meme coin"]),
    ("doj", &["justice department", "attorney general"]),
    ("scotus", &["supreme court"]),
    ("supreme court", &["scotus"]),
    ("senate", &["congress", "legislation"]),
    ("house", &["congress", "legislation", "house of representatives"]),
    ("congress", &["senate", "legislation", "house"]),
    ("executive order", &["president", "administration", "white house"]),

    // Crypto majors
    ("btc", &["bitcoin"]),
    ("bitcoin", &["btc", "crypto"]),
    ("eth", &["ethereum"]),
    ("ethereum", &["eth", "crypto"]),
    ("sol", &["solana"]),
    ("solana", &["sol", "crypto"]),
    ("xrp", &["ripple"]),
    ("ripple", &["xrp"]),
    ("sec", &["securities", "regulation", "crypto regulation"]),
    ("gensler", &["sec", "crypto regulation"]),
    ("etf", &["exchange traded fund", "bitcoin etf", "spot etf"]),
    ("spot etf", &["etf", "bitcoin etf", "sec"]),
    ("defi", &["decentralized finance", "crypto"]),
    ("stablecoin", &["usdc", "usdt", "tether"]),
    ("usdc", &["stablecoin", "crypto"]),
    ("usdt", &["stablecoin", "tether", "crypto"]),
    ("halving", &["bitcoin", "btc", "crypto"]),
    ("coinbase", &["crypto", "bitcoin", "exchange"]),
    ("binance", &["crypto", "exchange"]),

    // Ethereum ecosystem
    ("l2", &["layer 2", "ethereum", "eth"]),
    ("layer2", &["layer 2", "ethereum", "eth"]),
    ("layer-2", &["layer 2", "ethereum", "eth"]),
    ("layer 2", &["ethereum", "eth", "scaling"]),
    ("web3", &["ethereum", "eth", "defi", "crypto"]),
    ("dapp", &["ethereum", "eth", "defi"]),
    ("dapps", &["ethereum", "eth", "defi"]),
    ("gas fees", &["ethereum", "eth"]),
    ("gas fee", &["ethereum", "eth"]),
    ("gwei", &["ethereum", "eth", "gas fees"]),
    ("merge", &["ethereum", "eth", "proof of stake"]),
    ("proof of stake", &["ethereum", "eth", "staking"]),
    ("pos", &["proof of stake", "ethereum", "staking"]),
    ("staking", &["ethereum", "eth", "proof of stake"]),
    ("ens", &["ethereum", "eth"]),
    ("nft", &["ethereum", "eth", "digital art"]),
    ("nfts", &["ethereum", "eth", "nft"]),
    ("polygon", &["ethereum", "eth", "layer 2"]),
    ("arbitrum", &["ethereum", "eth", "layer 2"]),
    ("optimism", &["ethereum", "eth", "layer 2"]),
    ("base", &["ethereum", "eth", "layer 2"]),
    ("vitalik", &["ethereum", "eth", "buterin"]),
    ("buterin", &["ethereum", "eth", "vitalik"]),

    // Solana
    ("phantom", &["solana", "sol", "crypto"]),
    ("pump fun", &["solana", "sol", "memecoin"]),
    ("memecoin", &["crypto", "solana", "doge"]),
    ("meme coin", &["crypto", "solana", "doge"]),

    // Other crypto
    ("dogecoin", &["doge", "crypto"]),
    ("shib", &["shiba", "crypto", "memecoin"]),
    ("pepe", &["memecoin", "crypto"]),
    ("altcoin", &["crypto", "altcoins"]),
    ("altcoins", &["crypto", "altcoin"]),
    ("bull run", &["crypto", "bitcoin", "btc"]),
    ("bear market", &["crypto", "recession"]),
    ("crypto winter", &["crypto", "bitcoin", "bear market"]),
    ("on-chain", &["crypto", "blockchain", "defi"]),
    ("blockchain", &["crypto", "ethereum", "bitcoin"]),
    ("wallet", &["crypto", "ethereum", "bitcoin"]),
    ("metamask", &["ethereum", "eth", "defi", "web3"]),
    ("kraken", &["crypto", "exchange"]),
    ("ftx", &["crypto", "exchange", "sec"]),
    ("sbf", &["ftx", "crypto", "sec"]),

    // Tech and AI
    ("openai", &["ai", "artificial intelligence", "chatgpt", "gpt", "llm"]),
    ("chatgpt", &["openai", "ai", "llm"]),
    ("gpt", &["openai", "chatgpt", "ai", "llm"]),
    ("gpt-4", &["openai", "chatgpt", "ai", "llm"]),
    ("anthropic", &["ai", "claude", "llm", "artificial intelligence"]),
    ("claude", &["anthropic", "ai", "llm"]),
    ("gemini", &["google", "ai", "llm"]),
    ("llm", &["ai", "artificial intelligence"]),
    ("agi", &["artificial general intelligence", "ai"]),
    ("sam altman", &["openai", "ai", "chatgpt"]),
    ("altman", &["openai", "ai", "chatgpt"]),
    ("jensen huang", &["nvidia", "nvda", "gpu", "ai chips"]),
    ("huang", &["nvidia", "nvda", "gpu"]),
    ("nvda", &["nvidia"]),
    ("nvidia", &["nvda", "gpu", "ai chips", "semiconductors"]),
    ("gpu", &["nvidia", "nvda", "chips"]),
    ("chips", &["semiconductors", "nvidia", "tsmc"]),
    ("semiconductors", &["chips", "nvidia", "tsmc", "intel"]),
    ("tsmc", &["semiconductors", "chips", "taiwan"]),
    ("aapl", &["apple"]),
    ("apple", &["aapl", "iphone", "tim cook"]),
    ("tim cook", &["apple", "aapl"]),
    ("msft", &["microsoft"]),
    ("microsoft", &["msft"]),
    ("googl", &["google", "alphabet"]),
    ("google", &["googl", "alphabet"]),
    ("alphabet", &["google", "googl"]),
    ("meta", &["facebook", "instagram"]),
    ("big tech", &["apple", "google", "microsoft", "meta", "amazon"]),
    ("faang", &["big tech", "apple", "google", "meta", "amazon"]),
    ("eu ai act", &["ai regulation", "artificial intelligence", "regulation"]),

    // Geopolitics
    ("nato", &["alliance", "military", "europe", "ukraine"]),
    ("ukraine", &["russia", "war", "nato", "zelensky"]),
    ("zelensky", &["ukraine", "russia"]),
    ("putin", &["russia", "ukraine", "kremlin"]),
    ("kremlin", &["russia", "putin"]),
    ("prc", &["china", "beijing"]),
    ("beijing", &["china", "xi jinping"]),
    ("xi jinping", &["china", "beijing"]),
    ("xi", &["china", "xi jinping", "beijing"]),
    ("taiwan", &["china", "semiconductors", "tsmc"]),
    ("gaza", &["israel", "hamas", "middle east", "conflict"]),
    ("israel", &["gaza", "hamas", "middle east"]),
    ("ceasefire", &["ukraine", "russia", "peace", "conflict"]),
    ("peace deal", &["ukraine", "russia", "peace agreement", "ceasefire"]),

    // Sports
    ("nfl", &["football", "super bowl"]),
    ("nba", &["basketball"]),
    ("mlb", &["baseball"]),
    ("nhl", &["hockey"]),
    ("super bowl", &["nfl", "football"]),
    ("march madness", &["ncaa", "basketball"]),
    ("world cup", &["soccer", "football", "fifa"]),
    ("fifa", &["soccer", "world cup"]),
    ("mahomes", &["chiefs", "kansas city", "nfl", "super bowl"]),
    ("patrick mahomes", &["chiefs", "kansas city", "nfl", "super bowl"]),
    ("celtics", &["boston", "nba", "basketball"]),
    ("lakers", &["los angeles", "nba", "basketball"]),

    // Energy and climate
    ("crude", &["oil", "wti", "energy"]),
    ("wti", &["oil", "crude", "energy"]),
    ("brent", &["oil", "crude", "energy"]),
    ("opec", &["oil", "energy", "production cuts"]),
    ("ev", &["electric vehicle", "tesla", "clean energy"]),
    ("electric vehicle", &["ev", "tesla"]),
    ("tesla", &["ev", "electric vehicle", "elon musk"]),
    ("elon musk", &["tesla", "spacex", "twitter", "x", "doge"]),
    ("musk", &["tesla", "elon musk", "spacex", "doge"]),
    ("elon", &["elon musk", "tesla", "spacex", "doge"]),
    ("net zero", &["climate", "emissions", "carbon"]),
    ("paris agreement", &["climate", "emissions", "net zero"]),
    ("carbon", &["climate", "emissions", "carbon tax"]),
    ("global warming", &["climate change", "climate", "temperature"]),
    ("climate change", &["global warming", "climate", "emissions"]),

    // Trade and tariffs
    ("tariff", &["trade war", "trade deal", "import tax", "china trade", "trade"]),
    ("tariffs", &["tariff", "trade war", "trade deal", "import tax"]),
    ("trade war", &["tariff", "tariffs", "china", "trade deal"]),
    ("trade deal", &["tariff", "tariffs", "trade war", "trade"]),
    ("import tax", &["tariff", "tariffs", "trade"]),
    ("sanctions", &["trade", "russia", "china", "iran"]),

    // Immigration
    ("deportation", &["immigration", "border", "ice", "migrants", "undocumented"]),
    ("deport", &["deportation", "immigration", "ice", "border"]),
    ("immigration", &["border", "deportation", "ice", "migrants"]),
    ("border", &["immigration", "deportation", "wall"]),
    ("migrants", &["immigration", "border", "deportation"]),
    ("ice", &["deportation", "immigration", "border"]),

    // AI labs and models
    ("deepseek", &["ai", "llm", "china ai", "artificial intelligence"]),
    ("llama", &["meta", "ai", "llm", "open source ai"]),
    ("mistral", &["ai", "llm", "artificial intelligence"]),
    ("grok", &["xai", "elon musk", "ai", "llm"]),
    ("xai", &["grok", "elon musk", "ai"]),
    ("perplexity", &["ai", "search", "llm"]),
    ("cursor", &["ai", "coding", "developer tools"]),
    ("copilot", &["microsoft", "msft", "ai", "github"]),
    ("sora", &["openai", "ai", "video ai"]),
    ("o1", &["openai", "chatgpt", "ai", "reasoning"]),
    ("o3", &["openai", "chatgpt", "ai", "reasoning"]),

    // Political figures
    ("trump", &["president", "potus", "administration", "gop", "republican"]),
    ("donald trump", &["trump", "potus", "president", "republican"]),
    ("biden", &["president", "potus", "democrat", "administration"]),
    ("harris", &["democrat", "kamala", "vice president"]),
    ("marco rubio", &["senate", "republican", "secretary of state"]),
    ("rfk", &["health", "vaccines", "kennedy"]),
    ("vivek", &["doge", "republican", "government efficiency"]),

    // Single stocks
    ("palantir", &["pltr", "data analytics", "defense"]),
    ("pltr", &["palantir"]),
    ("saylor", &["bitcoin", "btc", "microstrategy", "mstr"]),
    ("microstrategy", &["bitcoin", "btc", "mstr", "saylor"]),
    ("mstr", &["microstrategy", "bitcoin", "btc"]),
    ("blackrock", &["etf", "bitcoin etf", "institutional"]),
    ("robinhood", &["stocks", "crypto", "retail investing"]),
    ("ipo", &["stocks", "listing", "public offering"]),

    // Countries
    ("japan", &["japanese", "yen", "nikkei", "jpy"]),
    ("japanese", &["japan", "yen"]),
    ("china", &["chinese", "prc", "beijing", "xi"]),
    ("india", &["modi", "rupee", "bse"]),
    ("germany", &["german", "euro", "bund", "europe"]),
    ("uk", &["britain", "gbp", "pound", "boe"]),
    ("iran", &["nuclear", "sanctions", "middle east"]),
    ("north korea", &["kim jong un", "nuclear", "missiles"]),

    // Layer 1s and memecoins
    ("sui", &["crypto", "layer 1"]),
    ("apt", &["aptos", "crypto", "layer 1"]),
    ("aptos", &["apt", "crypto", "layer 1"]),
    ("ton", &["telegram", "crypto"]),
    ("bnb", &["binance", "crypto"]),
    ("avax", &["avalanche", "crypto"]),
    ("avalanche", &["avax", "crypto"]),
    ("trump coin", &["crypto", "meme coin"]),
    ("meme", &["memecoin", "crypto", "doge"]),
    ("stablecoin bill", &["stablecoin", "crypto regulation", "congress"]),
    ("crypto bill", &["crypto regulation", "sec", "congress"]),
    ("strategic reserve", &["bitcoin", "btc", "crypto"]),

    // Banks and Wall Street
    ("goldman sachs", &["bitcoin", "crypto", "bank", "institutional", "wall street"]),
    ("goldman", &["goldman sachs", "bank", "wall street"]),
    ("david solomon", &["goldman sachs", "bitcoin", "bank"]),
    ("solomon", &["goldman sachs", "bank", "bitcoin"]),
    ("jpmorgan", &["bank", "jamie dimon", "financial", "wall street"]),
    ("jp morgan", &["jpmorgan", "bank", "jamie dimon"]),
    ("jamie dimon", &["jpmorgan", "bank", "bitcoin"]),
    ("dimon", &["jpmorgan", "bank", "jamie dimon"]),
    ("morgan stanley", &["bank", "wall street", "institutional"]),
    ("bank of america", &["bank", "bofa", "financial"]),
    ("bofa", &["bank of america", "bank"]),
    ("wells fargo", &["bank", "financial"]),
    ("citigroup", &["bank", "citi", "financial"]),
    ("citi", &["citigroup", "bank"]),
    ("hsbc", &["bank", "financial"]),
    ("wall street", &["banks", "financial", "stocks", "institutional"]),
    ("larry fink", &["blackrock", "etf", "bitcoin etf", "institutional"]),
    ("fink", &["blackrock", "etf", "bitcoin etf"]),
    ("ray dalio", &["bridgewater", "hedge fund", "investment"]),
    ("dalio", &["bridgewater", "investment"]),
    ("warren buffett", &["berkshire", "stocks", "investment"]),
    ("buffett", &["berkshire", "stocks"]),
    ("berkshire", &["warren buffett", "stocks", "insurance"]),
    ("citadel", &["ken griffin", "market maker", "hedge fund"]),
    ("ken griffin", &["citadel", "hedge fund"]),
    ("bridgewater", &["ray dalio", "hedge fund"]),
    ("ubs", &["bank", "switzerland", "financial"]),
    ("deutsche bank", &["bank", "german", "financial"]),
    ("standard chartered", &["bank", "financial"]),

    // Institutional crypto
    ("fidelity", &["bitcoin etf", "fbtc", "etf", "institutional"]),
    ("fbtc", &["fidelity", "bitcoin etf", "etf"]),
    ("ibit", &["blackrock", "bitcoin etf", "etf"]),
    ("gbtc", &["grayscale", "bitcoin etf", "crypto"]),
    ("grayscale", &["gbtc", "bitcoin etf", "crypto", "etf"]),
    ("bitwise", &["bitcoin etf", "etf", "crypto"]),
    ("ark invest", &["cathie wood", "etf", "bitcoin etf"]),
    ("cathie wood", &["ark invest", "etf", "bitcoin"]),
    ("cathie", &["ark invest", "bitcoin etf"]),
    ("institutional adoption", &["bitcoin", "crypto", "etf"]),
    ("institutional", &["bitcoin", "etf", "wall street"]),
    ("treasury", &["bitcoin", "strategic reserve", "government"]),

    // Bitcoin slang
    ("hodl", &["bitcoin", "btc", "crypto"]),
    ("holds bitcoin", &["bitcoin", "btc", "crypto"]),
    ("owns bitcoin", &["bitcoin", "btc", "crypto"]),
    ("buys bitcoin", &["bitcoin", "btc", "crypto"]),
    ("bought bitcoin", &["bitcoin", "btc", "crypto"]),
    ("adding bitcoin", &["bitcoin", "btc", "crypto"]),
    ("digital gold", &["bitcoin", "btc", "store of value"]),
    ("store of value", &["bitcoin", "btc", "gold"]),
    ("proof of work", &["bitcoin", "btc", "mining"]),
    ("pow", &["proof of work", "bitcoin", "mining"]),
    ("mining", &["bitcoin", "btc", "hashrate"]),
    ("hashrate", &["bitcoin", "btc", "mining"]),
    ("satoshi", &["bitcoin", "btc"]),
    ("sats", &["bitcoin", "btc", "satoshi"]),
    ("lightning", &["bitcoin", "btc", "lightning network"]),
    ("ordinals", &["bitcoin", "btc", "nft"]),
    ("runes", &["bitcoin", "btc"]),
    ("taproot", &["bitcoin", "btc"]),
    ("all time high", &["bitcoin", "crypto", "stocks", "ath"]),
    ("ath", &["all time high", "bitcoin", "crypto"]),
    ("all-time high", &["bitcoin", "crypto", "ath"]),
    ("new high", &["bitcoin", "crypto", "stocks"]),
    ("100k", &["bitcoin", "btc", "price target"]),
    ("150k", &["bitcoin", "btc", "price target"]),
    ("200k", &["bitcoin", "btc", "price target"]),

    // Executive branch
    ("scott bessent", &["treasury", "fiscal", "secretary treasury"]),
    ("bessent", &["treasury", "fiscal policy"]),
    ("howard lutnick", &["commerce", "cantor fitzgerald", "trade"]),
    ("lutnick", &["commerce", "trade"]),
    ("peter navarro", &["tariff", "trade war", "china"]),
    ("navarro", &["tariff", "trade war"]),
    ("robert kennedy", &["rfk", "health", "vaccines"]),
    ("department of government efficiency", &["doge", "spending cuts"]),

    // Big tech executives and chipmakers
    ("amazon", &["amzn", "aws", "cloud", "bezos"]),
    ("amzn", &["amazon"]),
    ("jeff bezos", &["amazon", "amzn"]),
    ("bezos", &["amazon", "amzn"]),
    ("andy jassy", &["amazon", "aws"]),
    ("spacex", &["elon musk", "rockets", "starship"]),
    ("starship", &["spacex", "elon musk"]),
    ("starlink", &["spacex", "elon musk", "satellite"]),
    ("mark zuckerberg", &["meta", "facebook", "instagram"]),
    ("zuckerberg", &["meta", "facebook", "ai"]),
    ("sundar pichai", &["google", "alphabet", "ai"]),
    ("satya nadella", &["microsoft", "msft", "ai"]),
    ("intel", &["semiconductors", "chips"]),
    ("amd", &["semiconductors", "chips", "gpu"]),
    ("qualcomm", &["semiconductors", "chips", "mobile"]),
    ("arm", &["semiconductors", "chips"]),

    // Global rates, currencies and commodities
    ("ecb", &["european central bank", "euro", "interest rates"]),
    ("european central bank", &["ecb", "euro", "interest rates"]),
    ("boe", &["bank of england", "pound", "interest rates"]),
    ("bank of england", &["boe", "pound", "interest rates"]),
    ("pboc", &["china", "yuan", "interest rates"]),
    ("boj", &["bank of japan", "yen", "japan"]),
    ("bank of japan", &["boj", "yen", "japan"]),
    ("dollar", &["usd", "dxy", "currency"]),
    ("dxy", &["dollar", "usd", "currency"]),
    ("usd", &["dollar", "dxy"]),
    ("euro", &["eur", "ecb", "europe"]),
    ("eur", &["euro", "ecb"]),
    ("yen", &["jpy", "japan", "boj"]),
    ("jpy", &["yen", "japan"]),
    ("yuan", &["cny", "rmb", "china"]),
    ("gold", &["xau", "precious metals", "store of value", "commodity"]),
    ("xau", &["gold", "precious metals"]),
    ("silver", &["xag", "precious metals", "commodity"]),
    ("commodities", &["gold", "oil", "energy", "agriculture"]),
    ("housing market", &["real estate", "mortgage", "fed"]),
    ("mortgage", &["housing market", "real estate", "interest rates", "fed"]),
    ("real estate", &["housing market", "mortgage"]),
    ("debt ceiling", &["congress", "fiscal", "treasury"]),
    ("default", &["debt", "treasury", "bonds"]),
    ("bonds", &["treasuries", "yield", "interest rates"]),
    ("yield", &["bonds", "treasuries", "interest rates"]),

    // Teams, players and award shows
    ("chiefs", &["kansas city", "nfl", "mahomes", "super bowl"]),
    ("eagles", &["philadelphia", "nfl", "super bowl"]),
    ("rams", &["los angeles", "nfl", "super bowl"]),
    ("bills", &["buffalo", "nfl", "super bowl"]),
    ("warriors", &["golden state", "nba", "basketball"]),
    ("heat", &["miami", "nba", "basketball"]),
    ("knicks", &["new york", "nba", "basketball"]),
    ("lebron", &["lakers", "nba", "basketball"]),
    ("curry", &["warriors", "nba", "basketball"]),
    ("messi", &["soccer", "football", "inter miami"]),
    ("ronaldo", &["soccer", "football", "cr7"]),
    ("wimbledon", &["tennis", "grand slam"]),
    ("us open", &["tennis", "grand slam"]),
    ("masters", &["golf", "augusta"]),
    ("oscars", &["academy awards", "movies", "film"]),
    ("academy awards", &["oscars", "movies", "film"]),
    ("grammy", &["music", "awards"]),
    ("emmys", &["tv", "television", "awards"]),

    // World leaders and regions
    ("middle east", &["israel", "gaza", "iran", "saudi"]),
    ("saudi", &["saudi arabia", "oil", "opec"]),
    ("saudi arabia", &["saudi", "oil", "opec"]),
    ("hamas", &["gaza", "israel", "middle east"]),
    ("hezbollah", &["israel", "middle east", "iran"]),
    ("kim jong un", &["north korea", "nuclear", "missiles"]),
    ("kim", &["north korea", "nuclear"]),
    ("modi", &["india", "bjp"]),
    ("macron", &["france", "europe", "eu"]),
    ("sunak", &["uk", "britain"]),
    ("scholz", &["germany", "german", "eu"]),
    ("europe", &["eu", "european", "ecb"]),
    ("eu", &["europe", "european union"]),
    ("africa", &["emerging markets"]),
    ("latin america", &["emerging markets"]),

    // Gaming
    ("gta", &["gta 6", "grand theft auto", "rockstar", "gaming"]),
    ("gta 6", &["gta", "grand theft auto", "rockstar", "gaming", "video game"]),
    ("gta vi", &["gta 6", "gta", "grand theft auto", "rockstar"]),
    ("grand theft auto", &["gta", "gta 6", "rockstar", "gaming"]),
    ("rockstar", &["gta", "gta 6", "gaming", "take two"]),
    ("take two", &["rockstar", "gta", "gaming"]),
    ("elden ring", &["fromsoftware", "souls", "gaming", "rpg", "dlc"]),
    ("fromsoftware", &["elden ring", "dark souls", "gaming", "souls"]),
    ("souls", &["elden ring", "dark souls", "fromsoftware", "gaming"]),
    ("dark souls", &["fromsoftware", "souls", "elden ring", "gaming"]),
    ("league of legends", &["lol", "riot games", "esports", "moba", "gaming"]),
    ("lol", &["league of legends", "esports", "riot games", "gaming"]),
    ("riot games", &["league of legends", "valorant", "gaming", "esports"]),
    ("faker", &["league of legends", "lol", "t1", "esports"]),
    ("t1", &["league of legends", "faker", "esports", "korea"]),
    ("valorant", &["riot games", "fps", "esports", "gaming", "tac shooter"]),
    ("sentinels", &["valorant", "esports", "tenz", "gaming"]),
    ("tenz", &["sentinels", "valorant", "esports"]),
    ("nintendo", &["switch", "switch 2", "gaming", "console", "zelda", "mario"]),
    ("switch", &["nintendo", "switch 2", "gaming", "console"]),
    ("switch 2", &["nintendo", "switch", "gaming", "console", "next gen"]),
    ("zelda", &["nintendo", "switch", "gaming", "tears of the kingdom"]),
    ("mario", &["nintendo", "switch", "gaming", "super mario"]),
    ("pokemon", &["nintendo", "switch", "gaming", "game freak"]),
    ("minecraft", &["mojang", "microsoft", "sandbox", "gaming", "video game"]),
    ("mojang", &["minecraft", "microsoft", "gaming"]),
    ("hollow knight", &["silksong", "indie game", "metroidvania", "team cherry"]),
    ("silksong", &["hollow knight", "indie game", "metroidvania", "gaming"]),
    ("indie game", &["gaming", "indie", "video game"]),
    ("esports", &["gaming", "competitive", "tournament", "league"]),
    ("gaming", &["video game", "esports", "gamer", "console"]),
    ("gamer", &["gaming", "video game", "esports"]),
    ("console", &["gaming", "playstation", "xbox", "nintendo"]),
    ("playstation", &["ps5", "sony", "gaming", "console"]),
    ("ps5", &["playstation", "sony", "gaming", "console"]),
    ("xbox", &["microsoft", "gaming", "console"]),

    // Music
    ("taylor swift", &["music", "pop", "swifties", "eras tour", "album"]),
    ("swifties", &["taylor swift", "music", "fandom"]),
    ("eras tour", &["taylor swift", "tour", "concert", "music"]),
    ("beyonce", &["music", "pop", "renaissance", "tour", "beyoncé"]),
    ("beyoncé", &["beyonce", "music", "pop"]),
    ("renaissance", &["beyonce", "music", "album"]),
    ("the weeknd", &["music", "pop", "r&b", "abel tesfaye"]),
    ("abel tesfaye", &["the weeknd", "music"]),
    ("coachella", &["music festival", "festival", "music", "concert"]),
    ("music festival", &["coachella", "concert", "music", "tour"]),
    ("festival", &["music festival", "concert", "music"]),
    ("sabrina carpenter", &["music", "pop", "singer", "espresso"]),
    ("espresso", &["sabrina carpenter", "music", "song"]),
    ("ye", &["kanye west", "kanye", "music", "rap", "hip hop"]),
    ("concert", &["music", "tour", "live music", "show"]),
    ("tour", &["concert", "music", "live music"]),
    ("album", &["music", "release", "new album"]),
    ("single", &["music", "song", "release"]),
    ("collaboration", &["music", "collab", "feature"]),
    ("collab", &["collaboration", "music", "feature"]),

    // Streaming, consumer brands and social
    ("kick", &["streaming", "xqc", "stake", "content creator"]),
    ("pokimane", &["twitch", "streaming", "content creator", "offlinetv"]),
    ("xqc", &["twitch", "kick", "streaming", "streamer", "content creator"]),
    ("mcdonalds", &["fast food", "breakfast", "restaurant", "mcdonald"]),
    ("mcdonald", &["mcdonalds", "fast food"]),
    ("starbucks", &["coffee", "sbux", "cafe", "union"]),
    ("sbux", &["starbucks", "coffee"]),
    ("fast food", &["mcdonalds", "burger king", "wendys", "restaurant"]),
    ("restaurant", &["fast food", "dining", "food"]),
    ("shein", &["fast fashion", "ecommerce", "fashion", "retail"]),
    ("balenciaga", &["fashion", "luxury", "brand", "designer"]),
    ("met gala", &["fashion", "vogue", "anna wintour", "red carpet"]),
    ("reddit", &["social media", "rddt", "stock", "wallstreetbets"]),
    ("wallstreetbets", &["reddit", "wsb", "stocks", "meme stock"]),
    ("wsb", &["wallstreetbets", "reddit", "stocks"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_has_gaming_entries() {
        let table = SynonymTable::builtin();
        assert_eq!(table.related("gta"), ["gta 6", "grand theft auto", "rockstar", "gaming"]);
    }

    #[test]
    fn test_missing_term_has_no_synonyms() {
        let table = SynonymTable::builtin();
        assert!(table.related("definitely not a term").is_empty());
    }

    #[test]
    fn test_relation_is_not_symmetric() {
        let table = SynonymTable::builtin();
        assert!(table.related("doge").iter().any(|s| s == "crypto"));
        assert!(table.related("crypto").is_empty());
    }

    #[test]
    fn test_builtin_entries_are_lowercase() {
        for (term, related) in BUILTIN_SYNONYMS {
            assert_eq!(*term, term.to_lowercase());
            for r in *related {
                assert_eq!(*r, r.to_lowercase(), "{term} -> {r}");
            }
        }
    }

    #[test]
    fn test_from_pairs_lowercases() {
        let table = SynonymTable::from_pairs([("BTC", &["Bitcoin"][..])]);
        assert_eq!(table.related("btc"), ["bitcoin"]);
        assert_eq!(table.len(), 1);
    }
}
