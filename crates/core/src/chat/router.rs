//! Ordered pattern -> handler routing over normalized chat input.
//!
//! The group list is the routing policy: groups are tried in priority order
//! and the first matching group answers. Predicate vocabulary overlaps
//! across groups on purpose (a broad "containers" group shadows the
//! specific container sizes unless the size stands alone), so the order
//! must not be rearranged casually.
//!
//! Calculator groups extract a leading quantity bound to their unit word;
//! a calculator whose capture is absent yields to the next group instead of
//! answering, which lets broader groups or the generative fallback pick the
//! message up.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::pricing::format_money;

use super::replies;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    Reply(String),
    Unmatched,
}

enum Handler {
    Reply(&'static str),
    Calculator { capture: Regex, rate: Decimal, template: &'static str },
    ChamberLookup { capture: Regex },
}

pub struct IntentGroup {
    name: &'static str,
    patterns: Vec<Regex>,
    unless: Option<Regex>,
    handler: Handler,
}

impl IntentGroup {
    fn matches(&self, message: &str) -> bool {
        if let Some(guard) = &self.unless {
            if guard.is_match(message) {
                return false;
            }
        }
        self.patterns.iter().any(|pattern| pattern.is_match(message))
    }

    fn respond(&self, message: &str) -> Option<String> {
        match &self.handler {
            Handler::Reply(text) => Some((*text).to_owned()),
            Handler::Calculator { capture, rate, template } => {
                let quantity: u64 = capture.captures(message)?.get(1)?.as_str().parse().ok()?;
                let total = Decimal::from(quantity) * *rate;
                Some(
                    template
                        .replace("{qty}", &quantity.to_string())
                        .replace("{total}", &format_money(total)),
                )
            }
            Handler::ChamberLookup { capture } => {
                let chamber = capture
                    .captures(message)
                    .and_then(|captures| captures.get(1))
                    .and_then(|group| group.as_str().parse::<u32>().ok());

                if let Some(number) = chamber {
                    if let Some((_, tenant)) = replies::CHAMBER_TENANTS
                        .iter()
                        .find(|(candidate, _)| *candidate == number)
                    {
                        return Some(format!("Chamber {number} is occupied by {tenant}."));
                    }
                }
                Some(replies::CHAMBER_SUMMARY.to_owned())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

pub struct IntentRouter {
    groups: Vec<IntentGroup>,
}

impl IntentRouter {
    pub fn new(groups: Vec<IntentGroup>) -> Self {
        Self { groups }
    }

    /// Strict first-match-wins evaluation over normalized text. A matching
    /// group that declines to answer (calculator without a quantity) yields
    /// to the groups after it.
    pub fn route(&self, normalized: &str) -> RouteOutcome {
        for group in &self.groups {
            if !group.matches(normalized) {
                continue;
            }
            if let Some(reply) = group.respond(normalized) {
                return RouteOutcome::Reply(reply);
            }
        }
        RouteOutcome::Unmatched
    }

    pub fn groups(&self) -> &[IntentGroup] {
        &self.groups
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("intent pattern must compile")
}

fn reply(name: &'static str, patterns: &[&str], text: &'static str) -> IntentGroup {
    IntentGroup {
        name,
        patterns: patterns.iter().map(|pattern| compile(pattern)).collect(),
        unless: None,
        handler: Handler::Reply(text),
    }
}

fn calculator(
    name: &'static str,
    patterns: &[&str],
    capture: &str,
    rate: Decimal,
    template: &'static str,
) -> IntentGroup {
    IntentGroup {
        name,
        patterns: patterns.iter().map(|pattern| compile(pattern)).collect(),
        unless: None,
        handler: Handler::Calculator { capture: compile(capture), rate, template },
    }
}

static DEFAULT_ROUTER: LazyLock<IntentRouter> = LazyLock::new(build_default_router);

/// The process-wide routing table, constructed once.
pub fn default_router() -> &'static IntentRouter {
    &DEFAULT_ROUTER
}

fn build_default_router() -> IntentRouter {
    let mut groups = vec![
        reply(
            "containers.overview",
            &[
                r"\bcontainers?\b",
                r"\bcontaner\b",
                r"types of containers?",
                r"container sizes?",
                r"container dimensions?",
                r"tell me.*containers?",
                r"container.*type",
                r"what.*container.*(type|size|information)",
                r"box.*type",
                r"freight box",
            ],
            replies::CONTAINER_OVERVIEW,
        ),
        reply(
            "containers.20ft",
            &[
                r"20\s*(ft|feet|foot)?\s*containers?",
                r"\btwenty\s*(ft|feet|foot)?\s*containers?",
                r"20.?ft\b",
            ],
            replies::CONTAINER_20FT,
        ),
        reply(
            "containers.40ft",
            &[
                r"40\s*(ft|feet|foot)?\s*containers?",
                r"\bforty\s*(ft|feet|foot)?\s*containers?",
                r"40.?ft\b",
            ],
            replies::CONTAINER_40FT,
        ),
        reply(
            "containers.high_cube",
            &[
                r"high cube.*containers?",
                r"40\s*(ft|feet|foot)?.*high cube",
                r"cube container",
                r"tall container",
                r"extra height container",
            ],
            replies::CONTAINER_HIGH_CUBE,
        ),
        reply(
            "containers.reefer",
            &[
                r"refrigerated container",
                r"refrigerated truck container",
                r"cold container",
                r"temperature control container",
            ],
            replies::CONTAINER_REEFER,
        ),
        reply(
            "containers.open_top",
            &[
                r"open top.*containers?",
                r"open roof.*container",
                r"no roof.*container",
                r"topless container",
            ],
            replies::CONTAINER_OPEN_TOP,
        ),
        reply(
            "containers.flat_rack",
            &[
                r"flat rack.*containers?",
                r"flat containers?",
                r"container.*no sides",
                r"open.*flat.*container",
            ],
            replies::CONTAINER_FLAT_RACK,
        ),
        reply(
            "containers.sme",
            &[
                r"\bsme\b",
                r"sme container",
                r"sme logistics",
                r"small modular container",
                r"modular storage box",
            ],
            replies::CONTAINER_SME,
        ),
        // The bare "storage" ask outranks the rate overview so a request with
        // no category named gets the clarifying question, never a fee table.
        reply(
            "storage.clarify",
            &[
                r"\bstorag[e]?\b$",
                r"warehouse rate",
                r"cost of warehouse",
                r"store.*cost",
                r"storage price",
            ],
            replies::STORAGE_CLARIFY,
        ),
        reply(
            "storage.rates",
            &[
                r"\bstorag[e]?\b.*(rate|cost|fee|price|charges?)",
                r"all.*storag[e]?.*rates?",
                r"show.*storag[e]?.*charges?",
                r"how much.*storag[e]?",
                r"\brates?\b.*warehouses?",
                r"quotation.*storag[e]?",
                r"complete.*rate",
                r"storage.*overview",
            ],
            replies::STORAGE_RATES,
        ),
        reply(
            "vas.standard",
            &[
                r"(standard|normal).*value added services?",
                r"standard.*services?",
                r"normal.*value added services?",
                r"standard.*value add(ed)?",
                r"standard.*charges?",
                r"handling.*standard",
                r"standard.*fees?",
                r"standard.*extras",
                r"standard.*packing",
                r"value added.*standard",
                r"regular value added services",
            ],
            replies::VAS_STANDARD,
        ),
        reply(
            "vas.chemical",
            &[
                r"chemical.*value added services?",
                r"chemical.*services?",
                r"hazmat.*value added",
                r"hazardous.*value added",
                r"dangerous goods.*value added",
                r"chemical.*charges?",
                r"chemical.*handling",
                r"chemical.*value add(ed)?",
                r"chemical.*extra services?",
                r"chemical.*fees?",
                r"chemical.*packing",
                r"chemical.*stickering",
            ],
            replies::VAS_CHEMICAL,
        ),
        reply(
            "vas.open_yard",
            &[
                r"open yard.*value added",
                r"yard.*services?",
                r"yard.*equipment",
                r"yard.*charges?",
                r"yard.*support",
                r"yard.*tools",
                r"forklift.*yard",
                r"crane.*yard",
                r"yard.*loading",
                r"yard.*handling",
                r"container.*lifting",
                r"yard.*operation",
                r"open yard.*extras?",
                r"open yard.*fees?",
                r"value add.*yard",
            ],
            replies::VAS_OPENYARD,
        ),
        calculator(
            "calc.handling",
            &[
                r"calculate.*handling.*(cbm|volume)",
                r"how much.*handling.*cbm",
                r"cost.*handling.*cbm",
            ],
            r"(\d+)\s*cbm",
            Decimal::from(20),
            "Handling for {qty} CBM at 20 AED/CBM = {total} AED.",
        ),
        calculator(
            "calc.pallet_loading",
            &[
                r"calculate.*pallet loading",
                r"how much.*loading.*pallet",
                r"pallet loading.*\d+",
                r"loading for.*pallets",
            ],
            r"(\d+)\s*pallet",
            Decimal::from(12),
            "Pallet loading for {qty} pallets at 12 AED/pallet = {total} AED.",
        ),
        calculator(
            "calc.packing",
            &[
                r"calculate.*packing.*pallet",
                r"how much.*pallet.*packing",
                r"cost.*packing.*pallet",
            ],
            r"(\d+)\s*pallet",
            Decimal::from(85),
            "Packing with pallet for {qty} pallets at 85 AED/CBM each = {total} AED.",
        ),
        calculator(
            "calc.case_picking",
            &[
                r"case picking.*\d+.*cartons?",
                r"picking.*cartons?",
                r"calculate.*case picking",
                r"picking.*case.*qty",
            ],
            r"(\d+)\s*carton",
            Decimal::new(25, 1),
            "Case picking for {qty} cartons at 2.5 AED/carton = {total} AED.",
        ),
        calculator(
            "calc.labeling",
            &[
                r"label.*\d+.*items?",
                r"calculate.*labeling",
                r"sticker.*\d+.*items?",
                r"how much.*sticker.*label",
            ],
            r"(\d+)\s*(?:items?|labels?)",
            Decimal::new(15, 1),
            "Sticker labeling for {qty} items at 1.5 AED/label = {total} AED.",
        ),
        calculator(
            "calc.shrink_wrap",
            &[
                r"shrink wrap.*\d+.*pallets?",
                r"calculate.*shrink wrap",
                r"how much.*shrink.*pallet",
            ],
            r"(\d+)\s*pallet",
            Decimal::from(6),
            "Shrink wrapping for {qty} pallets at 6 AED/pallet = {total} AED.",
        ),
        calculator(
            "calc.vna",
            &[
                r"vna usage.*\d+.*pallets?",
                r"calculate.*vna",
                r"vna.*pallet",
                r"vna.*charge",
            ],
            r"(\d+)\s*pallet",
            Decimal::new(25, 1),
            "VNA usage for {qty} pallets at 2.5 AED/pallet = {total} AED.",
        ),
        // The broad pallet group sits below the pallet calculators; a bare
        // "pallet" mention still lands here when no calculator claims it.
        reply(
            "pallets",
            &[
                r"\bpallets?\b",
                r"palet",
                r"pallete",
                r"types of pallets?",
                r"pallet.*size",
                r"pallet dimension",
                r"pallet.*specs?",
                r"standard.*pallet",
                r"euro.*pallet",
                r"pallets.*bay",
                r"pallet.*position",
                r"how many.*pallet.*bay",
                r"pallet information",
            ],
            replies::PALLETS,
        ),
        reply(
            "fleet",
            &[
                r"\bfleet\b",
                r"stowline.*fleet",
                r"fleet.*stowline",
                r"truck fleet",
                r"transport fleet",
                r"fleet information",
                r"trucking fleet",
                r"fleet.*vehicles",
                r"vehicle.*types",
                r"fleet.*list",
            ],
            replies::FLEET,
        ),
        reply(
            "trucks.types",
            &[
                r"truck.*types?",
                r"trucks?",
                r"transportation.*types?",
                r"transport.*available",
                r"types.*transport",
                r"trucking services",
                r"vehicle.*options",
                r"types.*vehicles",
            ],
            replies::TRUCK_TYPES,
        ),
        reply(
            "transportation",
            &[
                r"\btransportation\b",
                r"tell me about transportation",
                r"transport.*services?",
                r"what is transportation",
                r"freight.*movement",
                r"cargo transport",
            ],
            replies::TRANSPORTATION,
        ),
        reply(
            "trucks.capacity",
            &[
                r"truck.*(capacity|tonnage|load)",
                r"how.*ton.*truck.*carry",
                r"truck.*can carry.*how much",
                r"truck weight.*capacity",
                r"ton capacity",
                r"truck.*load.*information",
                r"flatbed.*ton",
                r"refrigerated truck.*capacity",
                r"box truck.*ton",
                r"double trailer.*ton",
                r"lowbed.*capacity",
                r"tipper.*ton",
                r"1 ton truck",
                r"3 ton truck",
            ],
            replies::TRUCK_CAPACITY,
        ),
    ];

    for &(pattern, text) in replies::DISTANCE_ROUTES {
        groups.push(reply("distance", &[pattern], text));
    }

    groups.extend([
        reply(
            "quotation.guide",
            &[
                r"quote|quotation|proposal|offer|need.*quote",
                r"send.*quotation",
                r"give me.*quotation",
                r"how to get.*quote",
                r"need.*proposal",
                r"storage.*proposal",
                r"generate.*quotation",
            ],
            replies::QUOTATION_GUIDE,
        ),
        reply(
            "quotation.requirements",
            &[
                r"(what|which).*collect.*(information|details|data).*quotation",
                r"what.*required.*quote",
                r"quotation.*requirements?",
                r"information.*quotation",
                r"build.*quotation",
                r"quotation.*steps",
                r"quote.*process",
                r"quote.*need",
                r"client.*quote",
            ],
            replies::QUOTATION_REQUIREMENTS,
        ),
        reply(
            "quotation.chemical_requirements",
            &[
                r"what.*(need|have).*collect.*chemical.*quote",
                r"what.*(to|do).*collect.*chemical.*quotation",
                r"build.*up.*chemical.*quote",
                r"build.*chemical.*quote",
                r"make.*chemical.*quotation",
                r"prepare.*chemical.*quote",
                r"chemical.*quote.*requirements",
                r"requirements.*chemical.*quote",
                r"information.*for.*chemical.*quote",
                r"details.*for.*chemical.*quotation",
                r"what.*required.*chemical.*quotation",
                r"quotation.*chemical.*details",
            ],
            replies::CHEMICAL_QUOTE_REQUIREMENTS,
        ),
        reply(
            "conversion.sqm_cbm",
            &[
                r"(convert|calculate|estimate).*cbm.*(from|using).*sqm",
                r"(how|what).*cbm.*(if|when).*client.*(gives|provides).*sqm",
                r"only.*sqm.*no.*cbm",
                r"sqm.*to.*cbm",
                r"cbm.*based.*sqm",
                r"sqm.*cbm.*conversion",
            ],
            replies::SQM_CBM_CONVERSION,
        ),
        reply(
            "sop",
            &[
                r"\bsop\b",
                r"standard operating procedures?",
                r"standard operation process",
                r"warehouse sop",
                r"operation.*steps",
                r"warehouse.*procedure",
                r"operation.*guide",
            ],
            replies::SOP,
        ),
        reply(
            "warehouse.operations",
            &[
                r"warehouse.*activity",
                r"warehouse.*process",
                r"warehouse.*steps",
                r"warehouse.*operation",
                r"warehouse.*task",
                r"warehouse.*workflow",
                r"warehouse.*flow",
                r"inbound.*steps",
                r"outbound.*steps",
            ],
            replies::WAREHOUSE_OPERATIONS,
        ),
        reply(
            "packing.materials",
            &[
                r"packing.*materials?",
                r"material.*used.*packing",
                r"relocation.*materials?",
                r"box.*material",
                r"wrapping.*material",
                r"strapping.*tool",
                r"packing.*supplies",
            ],
            replies::PACKING_MATERIALS,
        ),
        IntentGroup {
            name: "company.profile",
            patterns: [
                r"\bstowline\b",
                r"about stowline",
                r"who is stowline",
                r"what is stowline",
                r"stowline information",
                r"stowline abu dhabi",
                r"stowline company",
                r"tell me about stowline",
                r"stowline overview",
                r"stowline stands for",
                r"what does stowline mean",
            ]
            .iter()
            .map(|pattern| compile(pattern))
            .collect(),
            // A WMS question that happens to name the company is not a
            // company-profile question.
            unless: Some(compile(r"\bwms\b")),
            handler: Handler::Reply(replies::COMPANY_PROFILE),
        },
        reply(
            "facilities",
            &[
                r"abu dhabi.*facility",
                r"warehouse.*location",
                r"stowline.*abu dhabi.*warehouse",
                r"all warehouses",
                r"sub warehouse",
                r"m44",
                r"m45",
                r"al markaz",
                r"facility size",
                r"how big.*site",
            ],
            replies::FACILITIES,
        ),
        reply(
            "records.management",
            &[
                r"\brms\b",
                r"record management",
                r"document storage",
                r"paper archive",
                r"archive system",
                r"document warehouse",
                r"storage of files",
                r"hardcopy storage",
            ],
            replies::RECORDS_MANAGEMENT,
        ),
        reply(
            "sustainability",
            &[
                r"sustainability",
                r"green logistics",
                r"eco friendly",
                r"carbon footprint",
                r"environmental policy",
                r"zero emission",
                r"emission reduction",
                r"climate impact",
            ],
            replies::SUSTAINABILITY,
        ),
        reply(
            "adnoc",
            &[
                r"\badnoc\b",
                r"stowline.*adnoc",
                r"support.*adnoc",
                r"project.*adnoc",
                r"oil and gas.*client",
                r"adnoc.*logistics",
                r"adnoc.*storage",
                r"epc.*contractors",
            ],
            replies::ADNOC,
        ),
        reply(
            "certifications",
            &[
                r"certification",
                r"\biso\b",
                r"iso.*certified",
                r"which iso",
                r"\bgdp\b",
                r"gdp.*certified",
                r"gdp.*warehouse",
                r"gdp compliance",
                r"\bgdsp\b",
                r"gdsp.*certified",
                r"what is gdsp",
            ],
            replies::CERTIFICATIONS,
        ),
        reply(
            "fire.suppression",
            &[
                r"\bfm\s?200\b",
                r"fire system",
                r"fire suppression",
                r"fire safety",
                r"warehouse fire protection",
            ],
            replies::FIRE_SUPPRESSION,
        ),
        reply(
            "temperature.zones",
            &[
                r"\btemp(erature)?\b",
                r"cold room",
                r"freezer room",
                r"ambient storage",
                r"storage temperature",
                r"warehouse.*temperature",
                r"how cold",
                r"cold chain",
                r"temperature.*zones?",
                r"temperature.*range",
                r"temperature.*controlled",
            ],
            replies::TEMPERATURE_ZONES,
        ),
        reply(
            "pharma.cold_chain",
            &[
                r"pharma.*storage",
                r"pharmaceutical.*logistics",
                r"healthcare.*warehouse",
                r"gdp.*warehouse",
                r"cold chain.*pharma",
                r"gdp.*compliant",
                r"medicine.*storage",
                r"healthcare.*cold",
            ],
            replies::PHARMA_COLD_CHAIN,
        ),
        reply(
            "airport.freezone",
            &[
                r"airport freezone",
                r"freezone warehouse",
                r"abu dhabi free zone",
                r"free zone facility",
                r"freezone logistics",
                r"pharma.*freezone",
            ],
            replies::AIRPORT_FREEZONE,
        ),
        reply(
            "qhse",
            &[
                r"\bqhse\b",
                r"quality health safety environment",
                r"qhse policy",
                r"qhse.*standards?",
                r"hse.*policy",
                r"\bhse\b",
                r"health safety",
                r"safety.*protocol",
            ],
            replies::QHSE,
        ),
        reply(
            "training",
            &[
                r"training",
                r"staff training",
                r"employee training",
                r"warehouse.*training",
                r"worker induction",
                r"equipment training",
                r"hse training",
                r"safety training",
                r"toolbox talk",
            ],
            replies::TRAINING,
        ),
        IntentGroup {
            name: "chambers",
            patterns: [
                r"chambers.*21k",
                r"how many.*chambers",
                r"warehouse.*layout",
                r"\bch\d+\b",
                r"clients.*chambers",
                r"who.*in.*chamber",
                r"who.*in.*ch\d+",
                r"client.*chamber",
                r"chamber.*client",
            ]
            .iter()
            .map(|pattern| compile(pattern))
            .collect(),
            unless: None,
            handler: Handler::ChamberLookup { capture: compile(r"ch(?:amber)?\s*(\d+)") },
        },
        reply(
            "ev.trucks",
            &[
                r"electric truck",
                r"zero emission truck",
                r"green fleet",
                r"sustainable vehicle",
                r"electric fleet",
                r"eco friendly transport",
            ],
            replies::EV_TRUCKS,
        ),
        reply(
            "relocation",
            &[
                r"\brelocation\b",
                r"relocate",
                r"moving service",
                r"warehouse shifting",
                r"machinery shifting",
                r"office move",
                r"site relocation",
                r"heavy move",
                r"shift warehouse",
            ],
            replies::RELOCATION,
        ),
        reply(
            "asset.tracking",
            &[
                r"rfid",
                r"asset management",
                r"asset tracking",
                r"asset labeling",
                r"rfid gate",
                r"rfid solution",
                r"track.*equipment",
                r"label.*assets",
                r"barcode labeling",
                r"inventory tracking system",
            ],
            replies::ASSET_TRACKING,
        ),
        reply(
            "ecommerce",
            &[
                r"ecommerce",
                r"online shop",
                r"fulfillment",
                r"order processing",
                r"ecom logistics",
                r"ecom service",
                r"ecom warehouse",
                r"ecommerce solution",
                r"ecommerce warehouse",
            ],
            replies::ECOMMERCE,
        ),
        reply(
            "equipment",
            &[
                r"machinery",
                r"machines",
                r"equipment",
                r"warehouse.*equipment",
                r"yard.*equipment",
                r"forklift",
                r"crane",
                r"vna",
                r"reach truck",
                r"\bmhe\b",
                r"mhe tools",
                r"material handling",
            ],
            replies::EQUIPMENT,
        ),
        reply(
            "smalltalk.greeting",
            &[r"\bhello\b|\bhi\b|\bhey\b|good morning|good evening"],
            replies::GREETING,
        ),
        reply(
            "smalltalk.how_are_you",
            &[r"how.?are.?you|how.?s.?it.?going|whats.?up"],
            replies::HOW_ARE_YOU,
        ),
        reply(
            "smalltalk.thanks",
            &[r"\bthank(s| you)?\b|appreciate"],
            replies::THANKS,
        ),
    ]);

    IntentRouter::new(groups)
}
