//! Font Awesome 6 Brands raw entries, in upstream metadata order.
//!
//! Names are the upstream icon ids; the builder canonicalizes them.

/// Webfont file the codepoints belong to.
pub const FONT_FILE_NAME: &str = "fa-brands-400.ttf";

/// Suffix used for the font-file constant in emitted modules.
pub const ABBREVIATION: &str = "FAB";

pub const ICON_MIN: u32 = 0xe007;
pub const ICON_MAX_16: u32 = 0xf8e8;
pub const ICON_MAX: u32 = 0xf8e8;

#[rustfmt::skip]
pub const ENTRIES: &[(&str, &str)] = &[
    ("42-group", "\u{e080}"),
    ("500px", "\u{f26e}"),
    ("accessible-icon", "\u{f368}"),
    ("accusoft", "\u{f369}"),
    ("adn", "\u{f170}"),
    ("adversal", "\u{f36a}"),
    ("affiliatetheme", "\u{f36b}"),
    ("airbnb", "\u{f834}"),
    ("algolia", "\u{f36c}"),
    ("alipay", "\u{f642}"),
    ("amazon", "\u{f270}"),
    ("amazon-pay", "\u{f42c}"),
    ("amilia", "\u{f36d}"),
    ("android", "\u{f17b}"),
    ("angellist", "\u{f209}"),
    ("angrycreative", "\u{f36e}"),
    ("angular", "\u{f420}"),
    ("app-store", "\u{f36f}"),
    ("app-store-ios", "\u{f370}"),
    ("apper", "\u{f371}"),
    ("apple", "\u{f179}"),
    ("apple-pay", "\u{f415}"),
    ("artstation", "\u{f77a}"),
    ("asymmetrik", "\u{f372}"),
    ("atlassian", "\u{f77b}"),
    ("audible", "\u{f373}"),
    ("autoprefixer", "\u{f41c}"),
    ("avianex", "\u{f374}"),
    ("aviato", "\u{f421}"),
    ("aws", "\u{f375}"),
    ("bandcamp", "\u{f2d5}"),
    ("battle-net", "\u{f835}"),
    ("behance", "\u{f1b4}"),
    ("bilibili", "\u{e3d9}"),
    ("bimobject", "\u{f378}"),
    ("bitbucket", "\u{f171}"),
    ("bitcoin", "\u{f379}"),
    ("bity", "\u{f37a}"),
    ("black-tie", "\u{f27e}"),
    ("blackberry", "\u{f37b}"),
    ("blogger", "\u{f37c}"),
    ("blogger-b", "\u{f37d}"),
    ("bluesky", "\u{e671}"),
    ("bluetooth", "\u{f293}"),
    ("bluetooth-b", "\u{f294}"),
    ("bootstrap", "\u{f836}"),
    ("bots", "\u{e340}"),
    ("brave", "\u{e63c}"),
    ("brave-reverse", "\u{e63d}"),
    ("btc", "\u{f15a}"),
    ("buffer", "\u{f837}"),
    ("buromobelexperte", "\u{f37f}"),
    ("buy-n-large", "\u{f8a6}"),
    ("buysellads", "\u{f20d}"),
    ("canadian-maple-leaf", "\u{f785}"),
    ("cc-amazon-pay", "\u{f42d}"),
    ("cc-amex", "\u{f1f3}"),
    ("cc-apple-pay", "\u{f416}"),
    ("cc-diners-club", "\u{f24c}"),
    ("cc-discover", "\u{f1f2}"),
    ("cc-jcb", "\u{f24b}"),
    ("cc-mastercard", "\u{f1f1}"),
    ("cc-paypal", "\u{f1f4}"),
    ("cc-stripe", "\u{f1f5}"),
    ("cc-visa", "\u{f1f0}"),
    ("centercode", "\u{f380}"),
    ("centos", "\u{f789}"),
    ("chrome", "\u{f268}"),
    ("chromecast", "\u{f838}"),
    ("cloudflare", "\u{e07d}"),
    ("cloudscale", "\u{f383}"),
    ("cloudsmith", "\u{f384}"),
    ("cloudversify", "\u{f385}"),
    ("cmplid", "\u{e360}"),
    ("codepen", "\u{f1cb}"),
    ("codiepie", "\u{f284}"),
    ("confluence", "\u{f78d}"),
    ("connectdevelop", "\u{f20e}"),
    ("contao", "\u{f26d}"),
    ("cotton-bureau", "\u{f89e}"),
    ("cpanel", "\u{f388}"),
    ("creative-commons", "\u{f25e}"),
    ("creative-commons-by", "\u{f4e7}"),
    ("creative-commons-nc", "\u{f4e8}"),
    ("creative-commons-nc-eu", "\u{f4e9}"),
    ("creative-commons-nc-jp", "\u{f4ea}"),
    ("creative-commons-nd", "\u{f4eb}"),
    ("creative-commons-pd", "\u{f4ec}"),
    ("creative-commons-pd-alt", "\u{f4ed}"),
    ("creative-commons-remix", "\u{f4ee}"),
    ("creative-commons-sa", "\u{f4ef}"),
    ("creative-commons-sampling", "\u{f4f0}"),
    ("creative-commons-sampling-plus", "\u{f4f1}"),
    ("creative-commons-share", "\u{f4f2}"),
    ("creative-commons-zero", "\u{f4f3}"),
    ("critical-role", "\u{f6c9}"),
    ("css3", "\u{f13c}"),
    ("css3-alt", "\u{f38b}"),
    ("cuttlefish", "\u{f38c}"),
    ("d-and-d", "\u{f38d}"),
    ("d-and-d-beyond", "\u{f6ca}"),
    ("dailymotion", "\u{e052}"),
    ("dart-lang", "\u{e693}"),
    ("dashcube", "\u{f210}"),
    ("debian", "\u{e60b}"),
    ("deezer", "\u{e077}"),
    ("delicious", "\u{f1a5}"),
    ("deploydog", "\u{f38e}"),
    ("deskpro", "\u{f38f}"),
    ("dev", "\u{f6cc}"),
    ("deviantart", "\u{f1bd}"),
    ("dhl", "\u{f790}"),
    ("diaspora", "\u{f791}"),
    ("digg", "\u{f1a6}"),
    ("digital-ocean", "\u{f391}"),
    ("discord", "\u{f392}"),
    ("discourse", "\u{f393}"),
    ("dochub", "\u{f394}"),
    ("docker", "\u{f395}"),
    ("draft2digital", "\u{f396}"),
    ("dribbble", "\u{f17d}"),
    ("dropbox", "\u{f16b}"),
    ("drupal", "\u{f1a9}"),
    ("dyalog", "\u{f399}"),
    ("earlybirds", "\u{f39a}"),
    ("ebay", "\u{f4f4}"),
    ("edge", "\u{f282}"),
    ("edge-legacy", "\u{e078}"),
    ("elementor", "\u{f430}"),
    ("ello", "\u{f5f1}"),
    ("ember", "\u{f423}"),
    ("empire", "\u{f1d1}"),
    ("envira", "\u{f299}"),
    ("erlang", "\u{f39d}"),
    ("ethereum", "\u{f42e}"),
    ("etsy", "\u{f2d7}"),
    ("evernote", "\u{f839}"),
    ("expeditedssl", "\u{f23e}"),
    ("facebook", "\u{f09a}"),
    ("facebook-f", "\u{f39e}"),
    ("facebook-messenger", "\u{f39f}"),
    ("fantasy-flight-games", "\u{f6dc}"),
    ("fedex", "\u{f797}"),
    ("fedora", "\u{f798}"),
    ("figma", "\u{f799}"),
    ("firefox", "\u{f269}"),
    ("firefox-browser", "\u{e007}"),
    ("first-order", "\u{f2b0}"),
    ("first-order-alt", "\u{f50a}"),
    ("firstdraft", "\u{f3a1}"),
    ("flickr", "\u{f16e}"),
    ("flipboard", "\u{f44d}"),
    ("flutter", "\u{e694}"),
    ("fly", "\u{f417}"),
    ("font-awesome", "\u{f2b4}"),
    ("fonticons", "\u{f280}"),
    ("fonticons-fi", "\u{f3a2}"),
    ("fort-awesome", "\u{f286}"),
    ("fort-awesome-alt", "\u{f3a3}"),
    ("forumbee", "\u{f211}"),
    ("foursquare", "\u{f180}"),
    ("free-code-camp", "\u{f2c5}"),
    ("freebsd", "\u{f3a4}"),
    ("fulcrum", "\u{f50b}"),
    ("galactic-republic", "\u{f50c}"),
    ("galactic-senate", "\u{f50d}"),
    ("get-pocket", "\u{f265}"),
    ("gg", "\u{f260}"),
    ("gg-circle", "\u{f261}"),
    ("git", "\u{f1d3}"),
    ("git-alt", "\u{f841}"),
    ("github", "\u{f09b}"),
    ("github-alt", "\u{f113}"),
    ("gitkraken", "\u{f3a6}"),
    ("gitlab", "\u{f296}"),
    ("gitter", "\u{f426}"),
    ("glide", "\u{f2a5}"),
    ("glide-g", "\u{f2a6}"),
    ("gofore", "\u{f3a7}"),
    ("golang", "\u{e40f}"),
    ("goodreads", "\u{f3a8}"),
    ("goodreads-g", "\u{f3a9}"),
    ("google", "\u{f1a0}"),
    ("google-drive", "\u{f3aa}"),
    ("google-pay", "\u{e079}"),
    ("google-play", "\u{f3ab}"),
    ("google-plus", "\u{f2b3}"),
    ("google-plus-g", "\u{f0d5}"),
    ("google-scholar", "\u{e63b}"),
    ("google-wallet", "\u{f1ee}"),
    ("gratipay", "\u{f184}"),
    ("grav", "\u{f2d6}"),
    ("gripfire", "\u{f3ac}"),
    ("grunt", "\u{f3ad}"),
    ("guilded", "\u{e07e}"),
    ("gulp", "\u{f3ae}"),
    ("hacker-news", "\u{f1d4}"),
    ("hackerrank", "\u{f5f7}"),
    ("hashnode", "\u{e499}"),
    ("hips", "\u{f452}"),
    ("hire-a-helper", "\u{f3b0}"),
    ("hive", "\u{e07f}"),
    ("hooli", "\u{f427}"),
    ("hornbill", "\u{f592}"),
    ("hotjar", "\u{f3b1}"),
    ("houzz", "\u{f27c}"),
    ("html5", "\u{f13b}"),
    ("hubspot", "\u{f3b2}"),
    ("ideal", "\u{e013}"),
    ("imdb", "\u{f2d8}"),
    ("instagram", "\u{f16d}"),
    ("instalod", "\u{e081}"),
    ("intercom", "\u{f7af}"),
    ("internet-explorer", "\u{f26b}"),
    ("invision", "\u{f7b0}"),
    ("ioxhost", "\u{f208}"),
    ("itch-io", "\u{f83a}"),
    ("itunes", "\u{f3b4}"),
    ("itunes-note", "\u{f3b5}"),
    ("java", "\u{f4e4}"),
    ("jedi-order", "\u{f50e}"),
    ("jenkins", "\u{f3b6}"),
    ("jira", "\u{f7b1}"),
    ("joget", "\u{f3b7}"),
    ("joomla", "\u{f1aa}"),
    ("js", "\u{f3b8}"),
    ("jsfiddle", "\u{f1cc}"),
    ("jxl", "\u{e67b}"),
    ("kaggle", "\u{f5fa}"),
    ("keybase", "\u{f4f5}"),
    ("keycdn", "\u{f3ba}"),
    ("kickstarter", "\u{f3bb}"),
    ("kickstarter-k", "\u{f3bc}"),
    ("korvue", "\u{f42f}"),
    ("laravel", "\u{f3bd}"),
    ("lastfm", "\u{f202}"),
    ("leanpub", "\u{f212}"),
    ("less", "\u{f41d}"),
    ("letterboxd", "\u{e62d}"),
    ("line", "\u{f3c0}"),
    ("linkedin", "\u{f08c}"),
    ("linkedin-in", "\u{f0e1}"),
    ("linode", "\u{f2b8}"),
    ("linux", "\u{f17c}"),
    ("lyft", "\u{f3c3}"),
    ("magento", "\u{f3c4}"),
    ("mailchimp", "\u{f59e}"),
    ("mandalorian", "\u{f50f}"),
    ("markdown", "\u{f60f}"),
    ("mastodon", "\u{f4f6}"),
    ("maxcdn", "\u{f136}"),
    ("mdb", "\u{f8ca}"),
    ("medapps", "\u{f3c6}"),
    ("medium", "\u{f23a}"),
    ("medrt", "\u{f3c8}"),
    ("meetup", "\u{f2e0}"),
    ("megaport", "\u{f5a3}"),
    ("mendeley", "\u{f7b3}"),
    ("meta", "\u{e49b}"),
    ("microblog", "\u{e01a}"),
    ("microsoft", "\u{f3ca}"),
    ("mintbit", "\u{e62f}"),
    ("mix", "\u{f3cb}"),
    ("mixcloud", "\u{f289}"),
    ("mixer", "\u{e056}"),
    ("mizuni", "\u{f3cc}"),
    ("modx", "\u{f285}"),
    ("monero", "\u{f3d0}"),
    ("napster", "\u{f3d2}"),
    ("neos", "\u{f612}"),
    ("nfc-directional", "\u{e530}"),
    ("nfc-symbol", "\u{e531}"),
    ("nimblr", "\u{f5a8}"),
    ("node", "\u{f419}"),
    ("node-js", "\u{f3d3}"),
    ("npm", "\u{f3d4}"),
    ("ns8", "\u{f3d5}"),
    ("nutritionix", "\u{f3d6}"),
    ("octopus-deploy", "\u{e082}"),
    ("odnoklassniki", "\u{f263}"),
    ("odysee", "\u{e5c6}"),
    ("old-republic", "\u{f510}"),
    ("opencart", "\u{f23d}"),
    ("openid", "\u{f19b}"),
    ("opensuse", "\u{e62b}"),
    ("opera", "\u{f26a}"),
    ("optin-monster", "\u{f23c}"),
    ("orcid", "\u{f8d2}"),
    ("osi", "\u{f41a}"),
    ("padlet", "\u{e4a0}"),
    ("page4", "\u{f3d7}"),
    ("pagelines", "\u{f18c}"),
    ("palfed", "\u{f3d8}"),
    ("patreon", "\u{f3d9}"),
    ("paypal", "\u{f1ed}"),
    ("perbyte", "\u{e083}"),
    ("periscope", "\u{f3da}"),
    ("phabricator", "\u{f3db}"),
    ("phoenix-framework", "\u{f3dc}"),
    ("phoenix-squadron", "\u{f511}"),
    ("php", "\u{f457}"),
    ("pied-piper", "\u{f2ae}"),
    ("pied-piper-alt", "\u{f1a8}"),
    ("pied-piper-hat", "\u{f4e5}"),
    ("pied-piper-pp", "\u{f1a7}"),
    ("pinterest", "\u{f0d2}"),
    ("pinterest-p", "\u{f231}"),
    ("pix", "\u{e43a}"),
    ("pixiv", "\u{e640}"),
    ("playstation", "\u{f3df}"),
    ("product-hunt", "\u{f288}"),
    ("pushed", "\u{f3e1}"),
    ("python", "\u{f3e2}"),
    ("qq", "\u{f1d6}"),
    ("quinscape", "\u{f459}"),
    ("quora", "\u{f2c4}"),
    ("r-project", "\u{f4f7}"),
    ("raspberry-pi", "\u{f7bb}"),
    ("ravelry", "\u{f2d9}"),
    ("react", "\u{f41b}"),
    ("reacteurope", "\u{f75d}"),
    ("readme", "\u{f4d5}"),
    ("rebel", "\u{f1d0}"),
    ("red-river", "\u{f3e3}"),
    ("reddit", "\u{f1a1}"),
    ("reddit-alien", "\u{f281}"),
    ("redhat", "\u{f7bc}"),
    ("renren", "\u{f18b}"),
    ("replyd", "\u{f3e6}"),
    ("researchgate", "\u{f4f8}"),
    ("resolving", "\u{f3e7}"),
    ("rev", "\u{f5b2}"),
    ("rocketchat", "\u{f3e8}"),
    ("rockrms", "\u{f3e9}"),
    ("rust", "\u{e07a}"),
    ("safari", "\u{f267}"),
    ("salesforce", "\u{f83b}"),
    ("sass", "\u{f41e}"),
    ("schlix", "\u{f3ea}"),
    ("screenpal", "\u{e570}"),
    ("scribd", "\u{f28a}"),
    ("searchengin", "\u{f3eb}"),
    ("sellcast", "\u{f2da}"),
    ("sellsy", "\u{f213}"),
    ("servicestack", "\u{f3ec}"),
    ("shirtsinbulk", "\u{f214}"),
    ("shoelace", "\u{e60c}"),
    ("shopify", "\u{e057}"),
    ("shopware", "\u{f5b5}"),
    ("signal-messenger", "\u{e663}"),
    ("simplybuilt", "\u{f215}"),
    ("sistrix", "\u{f3ee}"),
    ("sith", "\u{f512}"),
    ("sitrox", "\u{e44a}"),
    ("sketch", "\u{f7c6}"),
    ("skyatlas", "\u{f216}"),
    ("skype", "\u{f17e}"),
    ("slack", "\u{f198}"),
    ("slideshare", "\u{f1e7}"),
    ("snapchat", "\u{f2ab}"),
    ("soundcloud", "\u{f1be}"),
    ("sourcetree", "\u{f7d3}"),
    ("space-awesome", "\u{e5ac}"),
    ("speakap", "\u{f3f3}"),
    ("speaker-deck", "\u{f83c}"),
    ("spotify", "\u{f1bc}"),
    ("square-behance", "\u{f1b5}"),
    ("square-dribbble", "\u{f397}"),
    ("square-facebook", "\u{f082}"),
    ("square-font-awesome", "\u{e5ad}"),
    ("square-font-awesome-stroke", "\u{f35c}"),
    ("square-git", "\u{f1d2}"),
    ("square-github", "\u{f092}"),
    ("square-gitlab", "\u{e5ae}"),
    ("square-google-plus", "\u{f0d4}"),
    ("square-hacker-news", "\u{f3af}"),
    ("square-instagram", "\u{e055}"),
    ("square-js", "\u{f3b9}"),
    ("square-lastfm", "\u{f203}"),
    ("square-letterboxd", "\u{e62e}"),
    ("square-odnoklassniki", "\u{f264}"),
    ("square-pied-piper", "\u{e01e}"),
    ("square-pinterest", "\u{f0d3}"),
    ("square-reddit", "\u{f1a2}"),
    ("square-snapchat", "\u{f2ad}"),
    ("square-steam", "\u{f1b7}"),
    ("square-threads", "\u{e619}"),
    ("square-tumblr", "\u{f174}"),
    ("square-twitter", "\u{f081}"),
    ("square-upwork", "\u{e67c}"),
    ("square-viadeo", "\u{f2aa}"),
    ("square-vimeo", "\u{f194}"),
    ("square-web-awesome", "\u{e683}"),
    ("square-web-awesome-stroke", "\u{e684}"),
    ("square-whatsapp", "\u{f40c}"),
    ("square-x-twitter", "\u{e61a}"),
    ("square-xing", "\u{f169}"),
    ("square-youtube", "\u{f431}"),
    ("squarespace", "\u{f5be}"),
    ("stack-exchange", "\u{f18d}"),
    ("stack-overflow", "\u{f16c}"),
    ("stackpath", "\u{f842}"),
    ("staylinked", "\u{f3f5}"),
    ("steam", "\u{f1b6}"),
    ("steam-symbol", "\u{f3f6}"),
    ("sticker-mule", "\u{f3f7}"),
    ("strava", "\u{f428}"),
    ("stripe", "\u{f429}"),
    ("stripe-s", "\u{f42a}"),
    ("stubber", "\u{e5c7}"),
    ("studiovinari", "\u{f3f8}"),
    ("stumbleupon", "\u{f1a4}"),
    ("stumbleupon-circle", "\u{f1a3}"),
    ("superpowers", "\u{f2dd}"),
    ("supple", "\u{f3f9}"),
    ("suse", "\u{f7d6}"),
    ("swift", "\u{f8e1}"),
    ("symfony", "\u{f83d}"),
    ("teamspeak", "\u{f4f9}"),
    ("telegram", "\u{f2c6}"),
    ("tencent-weibo", "\u{f1d5}"),
    ("the-red-yeti", "\u{f69d}"),
    ("themeco", "\u{f5c6}"),
    ("themeisle", "\u{f2b2}"),
    ("think-peaks", "\u{f731}"),
    ("threads", "\u{e618}"),
    ("tiktok", "\u{e07b}"),
    ("trade-federation", "\u{f513}"),
    ("trello", "\u{f181}"),
    ("tumblr", "\u{f173}"),
    ("twitch", "\u{f1e8}"),
    ("twitter", "\u{f099}"),
    ("typo3", "\u{f42b}"),
    ("uber", "\u{f402}"),
    ("ubuntu", "\u{f7df}"),
    ("uikit", "\u{f403}"),
    ("umbraco", "\u{f8e8}"),
    ("uncharted", "\u{e084}"),
    ("uniregistry", "\u{f404}"),
    ("unity", "\u{e049}"),
    ("unsplash", "\u{e07c}"),
    ("untappd", "\u{f405}"),
    ("ups", "\u{f7e0}"),
    ("upwork", "\u{e641}"),
    ("usb", "\u{f287}"),
    ("usps", "\u{f7e1}"),
    ("ussunnah", "\u{f407}"),
    ("vaadin", "\u{f408}"),
    ("viacoin", "\u{f237}"),
    ("viadeo", "\u{f2a9}"),
    ("viber", "\u{f409}"),
    ("vimeo", "\u{f40a}"),
    ("vimeo-v", "\u{f27d}"),
    ("vine", "\u{f1ca}"),
    ("vk", "\u{f189}"),
    ("vnv", "\u{f40b}"),
    ("vuejs", "\u{f41f}"),
    ("watchman-monitoring", "\u{e087}"),
    ("waze", "\u{f83f}"),
    ("web-awesome", "\u{e682}"),
    ("webflow", "\u{e65c}"),
    ("weebly", "\u{f5cc}"),
    ("weibo", "\u{f18a}"),
    ("weixin", "\u{f1d7}"),
    ("whatsapp", "\u{f232}"),
    ("whmcs", "\u{f40d}"),
    ("wikipedia-w", "\u{f266}"),
    ("windows", "\u{f17a}"),
    ("wirsindhandwerk", "\u{e2d0}"),
    ("wix", "\u{f5cf}"),
    ("wizards-of-the-coast", "\u{f730}"),
    ("wodu", "\u{e088}"),
    ("wolf-pack-battalion", "\u{f514}"),
    ("wordpress", "\u{f19a}"),
    ("wordpress-simple", "\u{f411}"),
    ("wpbeginner", "\u{f297}"),
    ("wpexplorer", "\u{f2de}"),
    ("wpforms", "\u{f298}"),
    ("wpressr", "\u{f3e4}"),
    ("x-twitter", "\u{e61b}"),
    ("xbox", "\u{f412}"),
    ("xing", "\u{f168}"),
    ("y-combinator", "\u{f23b}"),
    ("yahoo", "\u{f19e}"),
    ("yammer", "\u{f840}"),
    ("yandex", "\u{f413}"),
    ("yandex-international", "\u{f414}"),
    ("yarn", "\u{f7e3}"),
    ("yelp", "\u{f1e9}"),
    ("yoast", "\u{f2b1}"),
    ("youtube", "\u{f167}"),
    ("zhihu", "\u{f63f}"),
];
