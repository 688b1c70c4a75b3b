use std::collections::HashMap;

use lazy_static::lazy_static;

/// Trading-pair symbols the crypto cache keeps updated. Symbols outside
/// this list are ignored even when the bulk endpoint returns them.
pub const WATCHLIST: &[&str] = &[
    // IRT pairs (Toman)
    "BTCIRT", "ETHIRT", "LTCIRT", "USDTIRT", "XRPIRT", "BCHIRT", "BNBIRT", "EOSIRT", "XLMIRT",
    "ETCIRT", "TRXIRT", "DOGEIRT", "UNIIRT", "DAIIRT", "LINKIRT", "DOTIRT", "AAVEIRT", "ADAIRT",
    "SHIBIRT", "FTMIRT", "MATICIRT", "AXSIRT", "MANAIRT", "SANDIRT", "AVAXIRT", "MKRIRT",
    "GMTIRT", "USDCIRT", "CHZIRT", "GRTIRT", "CRVIRT", "EGLDIRT", "HBARIRT", "IMXIRT", "WBTCIRT",
    "ONEIRT", "ENSIRT", "1M_BTTIRT", "SUSHIIRT", "LDOIRT", "STORJIRT", "100K_FLOKIIRT", "GLMIRT",
    "XMRIRT", "ATOMIRT", "NOTIRT", "XTZIRT", "FILIRT", "1B_BABYDOGEIRT", "BANDIRT", "SOLIRT",
    "QNTIRT", "FETIRT", "LPTIRT", "SLPIRT", "COMPIRT", "MEMEIRT", "BATIRT", "SNXIRT", "TRBIRT",
    "1INCHIRT", "RSRIRT", "RNDRIRT", "YFIIRT", "LRCIRT", "1M_PEPEIRT", "APEIRT", "1M_NFTIRT",
    "ARBIRT", "DYDXIRT", "TONIRT", "APTIRT", "ALGOIRT", "NEARIRT", "ZRXIRT", "MASKIRT",
    "FLOWIRT", "OMGIRT", "WOOIRT", "ENJIRT",
    // USDT pairs (Dollar)
    "BTCUSDT", "ETHUSDT", "LTCUSDT", "XRPUSDT", "BCHUSDT", "BNBUSDT", "EOSUSDT", "XLMUSDT",
    "ETCUSDT", "TRXUSDT", "DOGEUSDT", "UNIUSDT", "DAIUSDT", "LINKUSDT", "DOTUSDT", "AAVEUSDT",
    "ADAUSDT", "SHIBUSDT", "FTMUSDT", "MATICUSDT", "AXSUSDT", "MANAUSDT", "SANDUSDT", "AVAXUSDT",
    "MKRUSDT", "GMTUSDT", "USDCUSDT", "BANDUSDT", "COMPUSDT", "HBARUSDT", "WBTCUSDT", "GLMUSDT",
    "ATOMUSDT", "RSRUSDT", "ENSUSDT", "NOTUSDT", "ONEUSDT", "XTZUSDT", "FLOWUSDT", "BATUSDT",
    "TRBUSDT", "YFIUSDT", "QNTUSDT", "IMXUSDT", "SOLUSDT", "TONUSDT", "SLPUSDT", "RNDRUSDT",
    "NEARUSDT", "WOOUSDT", "CRVUSDT", "EGLDUSDT", "LPTUSDT", "1INCHUSDT", "APEUSDT", "LRCUSDT",
    "ARBUSDT", "APTUSDT", "1M_NFTUSDT", "ZRXUSDT", "SUSHIUSDT", "FETUSDT", "ALGOUSDT",
    "1M_PEPEUSDT", "1B_BABYDOGEUSDT", "MASKUSDT", "1M_BTTUSDT", "STORJUSDT", "XMRUSDT",
    "FILUSDT", "ENJUSDT", "OMGUSDT", "CHZUSDT", "DYDXUSDT", "LDOUSDT",
];

/// Display name and icon for one cryptocurrency
#[derive(Debug, Clone)]
pub struct CryptoInfo {
    pub name: String,
    pub icon: String,
}

lazy_static! {
    /// Persian display names and icons keyed by bare base symbol
    static ref CRYPTO_INFO: HashMap<&'static str, (&'static str, &'static str)> = {
        let mut m = HashMap::new();
        m.insert("BTC", ("بیت کوین", "₿"));
        m.insert("ETH", ("اتریوم", "Ξ"));
        m.insert("LTC", ("لایت کوین", "Ł"));
        m.insert("USDT", ("تتر", "₮"));
        m.insert("XRP", ("ریپل", "XRP"));
        m.insert("BCH", ("بیت کوین کش", "BCH"));
        m.insert("BNB", ("بایننس کوین", "BNB"));
        m.insert("DOGE", ("دوج کوین", "Ð"));
        m.insert("ADA", ("کاردانو", "ADA"));
        m.insert("SHIB", ("شیبا اینو", "SHIB"));
        m.insert("SOL", ("سولانا", "SOL"));
        m.insert("DOT", ("پولکادات", "DOT"));
        m.insert("MATIC", ("پالیگان", "MATIC"));
        m.insert("AVAX", ("آوالانچ", "AVAX"));
        m.insert("EOS", ("ایاس", "EOS"));
        m.insert("XLM", ("استلار", "XLM"));
        m.insert("ETC", ("اتریوم کلاسیک", "ETC"));
        m.insert("TRX", ("ترون", "TRX"));
        m.insert("UNI", ("یونی سواپ", "UNI"));
        m.insert("DAI", ("دای", "DAI"));
        m.insert("LINK", ("چین لینک", "LINK"));
        m.insert("AAVE", ("آوه", "AAVE"));
        m.insert("FTM", ("فانتوم", "FTM"));
        m.insert("AXS", ("اکسی اینفینیتی", "AXS"));
        m.insert("MANA", ("دیسنترالند", "MANA"));
        m.insert("SAND", ("سندباکس", "SAND"));
        m.insert("MKR", ("میکر", "MKR"));
        m.insert("GMT", ("استپن", "GMT"));
        m.insert("USDC", ("یو اس دی کوین", "USDC"));
        m.insert("CHZ", ("چیلیز", "CHZ"));
        m.insert("GRT", ("گراف", "GRT"));
        m.insert("CRV", ("کرو", "CRV"));
        m.insert("BAND", ("بند پروتکل", "BAND"));
        m.insert("COMP", ("کامپاند", "COMP"));
        m.insert("EGLD", ("الروند", "EGLD"));
        m.insert("HBAR", ("هدرا", "HBAR"));
        m.insert("WBTC", ("رپد بیت کوین", "WBTC"));
        m.insert("IMX", ("ایموتابل ایکس", "IMX"));
        m.insert("ONE", ("هارمونی", "ONE"));
        m.insert("GLM", ("گولم", "GLM"));
        m.insert("ENS", ("انس", "ENS"));
        m.insert("1M_BTT", ("بیت تورنت", "BTT"));
        m.insert("SUSHI", ("سوشی سواپ", "SUSHI"));
        m.insert("LDO", ("لیدو", "LDO"));
        m.insert("ATOM", ("کازموس", "ATOM"));
        m.insert("STORJ", ("استورج", "STORJ"));
        m.insert("100K_FLOKI", ("فلوکی", "FLOKI"));
        m.insert("XMR", ("مونرو", "XMR"));
        m.insert("NOT", ("نوتیون", "NOT"));
        m.insert("XTZ", ("تزوس", "XTZ"));
        m.insert("FIL", ("فایل کوین", "FIL"));
        m.insert("1B_BABYDOGE", ("بیبی دوج", "BABYDOGE"));
        m.insert("SNX", ("سینتتیکس", "SNX"));
        m.insert("1INCH", ("وان اینچ", "1INCH"));
        m.insert("RSR", ("ریزرو رایتس", "RSR"));
        m.insert("RNDR", ("رندر", "RNDR"));
        m.insert("YFI", ("یرن فایننس", "YFI"));
        m.insert("QNT", ("کوانت", "QNT"));
        m.insert("FET", ("فتچ", "FET"));
        m.insert("LPT", ("لیوپیر", "LPT"));
        m.insert("SLP", ("اسموث لاو پوشن", "SLP"));
        m.insert("MEME", ("میم کوین", "MEME"));
        m.insert("BAT", ("بیسیک اتنشن توکن", "BAT"));
        m.insert("TRB", ("تلور", "TRB"));
        m.insert("LRC", ("لوپرینگ", "LRC"));
        m.insert("1M_PEPE", ("پپه", "PEPE"));
        m.insert("APE", ("اپ کوین", "APE"));
        m.insert("1M_NFT", ("ان اف تی", "NFT"));
        m.insert("ARB", ("آربیتروم", "ARB"));
        m.insert("DYDX", ("دیدکس", "DYDX"));
        m.insert("TON", ("تون کوین", "TON"));
        m.insert("APT", ("آپتوس", "APT"));
        m.insert("ALGO", ("الگوراند", "ALGO"));
        m.insert("NEAR", ("نیر پروتکل", "NEAR"));
        m.insert("ZRX", ("زیرو ایکس", "ZRX"));
        m.insert("MASK", ("ماسک نتورک", "MASK"));
        m.insert("FLOW", ("فلو", "FLOW"));
        m.insert("OMG", ("او ام جی", "OMG"));
        m.insert("WOO", ("وو نتورک", "WOO"));
        m.insert("ENJ", ("انجین کوین", "ENJ"));
        m
    };
}

/// Display info for a base symbol (e.g. "BTC"). Unknown symbols get a
/// synthesized entry so this never fails.
pub fn crypto_info(base_symbol: &str) -> CryptoInfo {
    match CRYPTO_INFO.get(base_symbol) {
        Some((name, icon)) => CryptoInfo {
            name: (*name).to_string(),
            icon: (*icon).to_string(),
        },
        None => CryptoInfo {
            name: base_symbol.to_string(),
            icon: base_symbol.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbol_info() {
        let info = crypto_info("BTC");
        assert_eq!(info.name, "بیت کوین");
        assert_eq!(info.icon, "₿");
    }

    #[test]
    fn test_unknown_symbol_synthesized() {
        let info = crypto_info("XYZZY");
        assert_eq!(info.name, "XYZZY");
        assert_eq!(info.icon, "XYZZY");
    }

    #[test]
    fn test_watchlist_has_both_quote_sides() {
        assert!(WATCHLIST.contains(&"BTCIRT"));
        assert!(WATCHLIST.contains(&"BTCUSDT"));
    }
}
