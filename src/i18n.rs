//! UI Translations
//!
//! Supported languages with direction handling, plus the `t()` string
//! catalog. Backend content is localized server-side per the `lang`
//! query parameter; this module only covers the chrome strings.

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    He,
    Ar,
}

/// localStorage key for the saved language choice
const STORAGE_KEY: &str = "language";

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::En, Lang::He, Lang::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::He => "he",
            Lang::Ar => "ar",
        }
    }

    /// Document direction for this language
    pub fn dir(self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::He | Lang::Ar => "rtl",
        }
    }

    /// Short label shown in the switcher
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::He => "עב",
            Lang::Ar => "AR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            "he" | "he-il" | "iw" => Some(Lang::He),
            "ar" | "ar-il" | "ar-sa" => Some(Lang::Ar),
            _ => None,
        }
    }
}

/// Read the saved language from localStorage, if any
pub fn load_saved_lang() -> Option<Lang> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let code = storage.get_item(STORAGE_KEY).ok()??;
    Lang::from_code(&code)
}

/// Persist the language choice and update the document attributes
pub fn apply_lang(lang: Lang) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(storage)) = win.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, lang.code());
        }
        if let Some(root) = win.document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute("lang", lang.code());
            let _ = root.set_attribute("dir", lang.dir());
        }
    }
}

/// Translate a key for a given language. Falls back to English if the
/// language has no entry, then to the key itself.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Nav
        (Lang::En, "nav.home") => "Home".to_string(),
        (Lang::He, "nav.home") => "בית".to_string(),
        (Lang::Ar, "nav.home") => "الرئيسية".to_string(),
        (Lang::En, "nav.about") => "About".to_string(),
        (Lang::He, "nav.about") => "אודות".to_string(),
        (Lang::Ar, "nav.about") => "من نحن".to_string(),
        (Lang::En, "nav.portfolio") => "Portfolio".to_string(),
        (Lang::He, "nav.portfolio") => "נכסים".to_string(),
        (Lang::Ar, "nav.portfolio") => "العقارات".to_string(),
        (Lang::En, "nav.services") => "Services".to_string(),
        (Lang::He, "nav.services") => "שירותים".to_string(),
        (Lang::Ar, "nav.services") => "الخدمات".to_string(),
        (Lang::En, "nav.testimonials") => "Testimonials".to_string(),
        (Lang::He, "nav.testimonials") => "המלצות".to_string(),
        (Lang::Ar, "nav.testimonials") => "آراء العملاء".to_string(),
        (Lang::En, "nav.contact") => "Contact".to_string(),
        (Lang::He, "nav.contact") => "צור קשר".to_string(),
        (Lang::Ar, "nav.contact") => "اتصل بنا".to_string(),
        (Lang::En, "nav.team") => "Team".to_string(),
        (Lang::He, "nav.team") => "הצוות".to_string(),
        (Lang::Ar, "nav.team") => "الفريق".to_string(),
        (Lang::En, "nav.courses") => "Courses".to_string(),
        (Lang::He, "nav.courses") => "קורסים".to_string(),
        (Lang::Ar, "nav.courses") => "الدورات".to_string(),

        // Hero
        (Lang::En, "hero.tagline") => "Luxury Real Estate in the Galilee".to_string(),
        (Lang::He, "hero.tagline") => "נדל\"ן יוקרתי בגליל".to_string(),
        (Lang::Ar, "hero.tagline") => "عقارات فاخرة في الجليل".to_string(),
        (Lang::En, "hero.subtitle") => "Your home, our commitment".to_string(),
        (Lang::He, "hero.subtitle") => "הבית שלך, המחויבות שלנו".to_string(),
        (Lang::Ar, "hero.subtitle") => "بيتك، التزامنا".to_string(),
        (Lang::En, "hero.cta.explore") => "Explore Properties".to_string(),
        (Lang::He, "hero.cta.explore") => "גלה נכסים".to_string(),
        (Lang::Ar, "hero.cta.explore") => "استكشف العقارات".to_string(),
        (Lang::En, "hero.cta.contact") => "Get in Touch".to_string(),
        (Lang::He, "hero.cta.contact") => "דברו איתנו".to_string(),
        (Lang::Ar, "hero.cta.contact") => "تواصل معنا".to_string(),

        // About
        (Lang::En, "about.title") => "About Us".to_string(),
        (Lang::He, "about.title") => "אודותינו".to_string(),
        (Lang::Ar, "about.title") => "من نحن".to_string(),
        (Lang::En, "about.body") => {
            "ALL IN is a boutique brokerage serving Nof HaGalil and the wider Galilee, pairing local knowledge with full-service representation for buyers, sellers, and investors.".to_string()
        }
        (Lang::He, "about.body") => {
            "ALL IN היא סוכנות בוטיק המשרתת את נוף הגליל והגליל כולו, המשלבת היכרות מקומית עם ליווי מלא לקונים, מוכרים ומשקיעים.".to_string()
        }
        (Lang::Ar, "about.body") => {
            "ALL IN وكالة عقارية تخدم نوف هجليل والجليل، تجمع بين المعرفة المحلية والمرافقة الكاملة للمشترين والبائعين والمستثمرين.".to_string()
        }
        (Lang::En, "about.stats.properties") => "Properties Sold".to_string(),
        (Lang::He, "about.stats.properties") => "נכסים שנמכרו".to_string(),
        (Lang::Ar, "about.stats.properties") => "عقارات مباعة".to_string(),
        (Lang::En, "about.stats.clients") => "Happy Clients".to_string(),
        (Lang::He, "about.stats.clients") => "לקוחות מרוצים".to_string(),
        (Lang::Ar, "about.stats.clients") => "عملاء راضون".to_string(),
        (Lang::En, "about.stats.years") => "Years of Experience".to_string(),
        (Lang::He, "about.stats.years") => "שנות ניסיון".to_string(),
        (Lang::Ar, "about.stats.years") => "سنوات خبرة".to_string(),

        // Portfolio preview
        (Lang::En, "portfolio.empty") => "No properties found in this category".to_string(),
        (Lang::He, "portfolio.empty") => "לא נמצאו נכסים בקטגוריה זו".to_string(),
        (Lang::Ar, "portfolio.empty") => "لا توجد عقارات في هذه الفئة".to_string(),
        (Lang::En, "portfolio.title") => "Featured Properties".to_string(),
        (Lang::He, "portfolio.title") => "נכסים נבחרים".to_string(),
        (Lang::Ar, "portfolio.title") => "عقارات مميزة".to_string(),
        (Lang::En, "portfolio.viewDetails") => "View Details".to_string(),
        (Lang::He, "portfolio.viewDetails") => "לפרטים".to_string(),
        (Lang::Ar, "portfolio.viewDetails") => "عرض التفاصيل".to_string(),
        (Lang::En, "portfolio.viewAll") => "View All Properties".to_string(),
        (Lang::He, "portfolio.viewAll") => "לכל הנכסים".to_string(),
        (Lang::Ar, "portfolio.viewAll") => "جميع العقارات".to_string(),

        // Services
        (Lang::En, "services.title") => "Our Services".to_string(),
        (Lang::He, "services.title") => "השירותים שלנו".to_string(),
        (Lang::Ar, "services.title") => "خدماتنا".to_string(),
        (Lang::En, "services.error") => "Failed to load services.".to_string(),
        (Lang::He, "services.error") => "טעינת השירותים נכשלה.".to_string(),
        (Lang::Ar, "services.error") => "فشل تحميل الخدمات.".to_string(),

        // Testimonials
        (Lang::En, "testimonials.title") => "What Our Clients Say".to_string(),
        (Lang::He, "testimonials.title") => "מה הלקוחות שלנו אומרים".to_string(),
        (Lang::Ar, "testimonials.title") => "ماذا يقول عملاؤنا".to_string(),
        (Lang::En, "testimonials.error") => "Failed to load testimonials.".to_string(),
        (Lang::He, "testimonials.error") => "טעינת ההמלצות נכשלה.".to_string(),
        (Lang::Ar, "testimonials.error") => "فشل تحميل آراء العملاء.".to_string(),

        // Contact
        (Lang::En, "contact.title") => "Contact Us".to_string(),
        (Lang::He, "contact.title") => "צור קשר".to_string(),
        (Lang::Ar, "contact.title") => "اتصل بنا".to_string(),
        (Lang::En, "contact.subtitle") => "We would love to hear from you".to_string(),
        (Lang::He, "contact.subtitle") => "נשמח לשמוע מכם".to_string(),
        (Lang::Ar, "contact.subtitle") => "يسعدنا التواصل معكم".to_string(),
        (Lang::En, "contact.form.name") => "Full Name".to_string(),
        (Lang::He, "contact.form.name") => "שם מלא".to_string(),
        (Lang::Ar, "contact.form.name") => "الاسم الكامل".to_string(),
        (Lang::En, "contact.form.email") => "Email".to_string(),
        (Lang::He, "contact.form.email") => "אימייל".to_string(),
        (Lang::Ar, "contact.form.email") => "البريد الإلكتروني".to_string(),
        (Lang::En, "contact.form.phone") => "Phone".to_string(),
        (Lang::He, "contact.form.phone") => "טלפון".to_string(),
        (Lang::Ar, "contact.form.phone") => "الهاتف".to_string(),
        (Lang::En, "contact.form.interest") => "I'm interested in".to_string(),
        (Lang::He, "contact.form.interest") => "אני מתעניין ב".to_string(),
        (Lang::Ar, "contact.form.interest") => "أنا مهتم بـ".to_string(),
        (Lang::En, "contact.form.interest.buying") => "Buying".to_string(),
        (Lang::He, "contact.form.interest.buying") => "קנייה".to_string(),
        (Lang::Ar, "contact.form.interest.buying") => "شراء".to_string(),
        (Lang::En, "contact.form.interest.selling") => "Selling".to_string(),
        (Lang::He, "contact.form.interest.selling") => "מכירה".to_string(),
        (Lang::Ar, "contact.form.interest.selling") => "بيع".to_string(),
        (Lang::En, "contact.form.interest.renting") => "Renting".to_string(),
        (Lang::He, "contact.form.interest.renting") => "השכרה".to_string(),
        (Lang::Ar, "contact.form.interest.renting") => "إيجار".to_string(),
        (Lang::En, "contact.form.interest.courses") => "Courses".to_string(),
        (Lang::He, "contact.form.interest.courses") => "קורסים".to_string(),
        (Lang::Ar, "contact.form.interest.courses") => "دورات".to_string(),
        (Lang::En, "contact.form.message") => "Message".to_string(),
        (Lang::He, "contact.form.message") => "הודעה".to_string(),
        (Lang::Ar, "contact.form.message") => "رسالة".to_string(),
        (Lang::En, "contact.form.submit") => "Send Message".to_string(),
        (Lang::He, "contact.form.submit") => "שלח הודעה".to_string(),
        (Lang::Ar, "contact.form.submit") => "إرسال".to_string(),
        (Lang::En, "contact.form.sending") => "Sending...".to_string(),
        (Lang::He, "contact.form.sending") => "שולח...".to_string(),
        (Lang::Ar, "contact.form.sending") => "جارٍ الإرسال...".to_string(),
        (Lang::En, "contact.form.sent") => "Thank you! We'll be in touch shortly.".to_string(),
        (Lang::He, "contact.form.sent") => "תודה! ניצור קשר בקרוב.".to_string(),
        (Lang::Ar, "contact.form.sent") => "شكرًا! سنتواصل معكم قريبًا.".to_string(),
        (Lang::En, "contact.form.failed") => "Failed to submit message. Please try again.".to_string(),
        (Lang::He, "contact.form.failed") => "שליחת ההודעה נכשלה. נסו שוב.".to_string(),
        (Lang::Ar, "contact.form.failed") => "فشل إرسال الرسالة. حاول مرة أخرى.".to_string(),

        // Projects page
        (Lang::En, "projects.title") => "Our Properties".to_string(),
        (Lang::He, "projects.title") => "הנכסים שלנו".to_string(),
        (Lang::Ar, "projects.title") => "عقاراتنا".to_string(),
        (Lang::En, "projects.subtitle") => "Explore our collection".to_string(),
        (Lang::He, "projects.subtitle") => "גלו את האוסף שלנו".to_string(),
        (Lang::Ar, "projects.subtitle") => "استكشف مجموعتنا".to_string(),
        (Lang::En, "projects.filters.all") => "All".to_string(),
        (Lang::He, "projects.filters.all") => "הכל".to_string(),
        (Lang::Ar, "projects.filters.all") => "الكل".to_string(),
        (Lang::En, "projects.filters.forSale") => "For Sale".to_string(),
        (Lang::He, "projects.filters.forSale") => "למכירה".to_string(),
        (Lang::Ar, "projects.filters.forSale") => "للبيع".to_string(),
        (Lang::En, "projects.filters.forRent") => "For Rent".to_string(),
        (Lang::He, "projects.filters.forRent") => "להשכרה".to_string(),
        (Lang::Ar, "projects.filters.forRent") => "للإيجار".to_string(),
        (Lang::En, "projects.filters.sold") => "Sold".to_string(),
        (Lang::He, "projects.filters.sold") => "נמכר".to_string(),
        (Lang::Ar, "projects.filters.sold") => "مباع".to_string(),
        (Lang::En, "projects.loading") => "Loading properties...".to_string(),
        (Lang::He, "projects.loading") => "טוען נכסים...".to_string(),
        (Lang::Ar, "projects.loading") => "جارٍ تحميل العقارات...".to_string(),
        (Lang::En, "projects.error") => "Failed to load properties. Please try again later.".to_string(),
        (Lang::He, "projects.error") => "טעינת הנכסים נכשלה. נסו שוב מאוחר יותר.".to_string(),
        (Lang::Ar, "projects.error") => "فشل تحميل العقارات. حاول لاحقًا.".to_string(),
        (Lang::En, "projects.retry") => "Retry".to_string(),
        (Lang::He, "projects.retry") => "נסה שוב".to_string(),
        (Lang::Ar, "projects.retry") => "إعادة المحاولة".to_string(),
        (Lang::En, "projects.noProperties") => "No properties found".to_string(),
        (Lang::He, "projects.noProperties") => "לא נמצאו נכסים".to_string(),
        (Lang::Ar, "projects.noProperties") => "لم يتم العثور على عقارات".to_string(),
        (Lang::En, "projects.toggles.map") => "Map".to_string(),
        (Lang::He, "projects.toggles.map") => "מפה".to_string(),
        (Lang::Ar, "projects.toggles.map") => "الخريطة".to_string(),
        (Lang::En, "projects.toggles.details") => "Details".to_string(),
        (Lang::He, "projects.toggles.details") => "פרטים".to_string(),
        (Lang::Ar, "projects.toggles.details") => "التفاصيل".to_string(),
        (Lang::En, "projects.map.locating") => "Locating properties...".to_string(),
        (Lang::He, "projects.map.locating") => "מאתר נכסים...".to_string(),
        (Lang::Ar, "projects.map.locating") => "جارٍ تحديد المواقع...".to_string(),
        (Lang::En, "projects.map.none") => "No properties could be placed on the map".to_string(),
        (Lang::He, "projects.map.none") => "לא ניתן למקם נכסים על המפה".to_string(),
        (Lang::Ar, "projects.map.none") => "تعذر وضع العقارات على الخريطة".to_string(),

        // Project details
        (Lang::En, "projectDetails.selectProperty") => "Select a property to see details".to_string(),
        (Lang::He, "projectDetails.selectProperty") => "בחרו נכס לצפייה בפרטים".to_string(),
        (Lang::Ar, "projectDetails.selectProperty") => "اختر عقارًا لعرض التفاصيل".to_string(),
        (Lang::En, "projectDetails.untitledProperty") => "Untitled Property".to_string(),
        (Lang::He, "projectDetails.untitledProperty") => "נכס ללא שם".to_string(),
        (Lang::Ar, "projectDetails.untitledProperty") => "عقار بدون اسم".to_string(),
        (Lang::En, "projectDetails.locationNotSpecified") => "Location not specified".to_string(),
        (Lang::He, "projectDetails.locationNotSpecified") => "מיקום לא צוין".to_string(),
        (Lang::Ar, "projectDetails.locationNotSpecified") => "الموقع غير محدد".to_string(),
        (Lang::En, "projectDetails.beds") => "Beds".to_string(),
        (Lang::He, "projectDetails.beds") => "חדרים".to_string(),
        (Lang::Ar, "projectDetails.beds") => "غرف".to_string(),
        (Lang::En, "projectDetails.baths") => "Baths".to_string(),
        (Lang::He, "projectDetails.baths") => "חדרי רחצה".to_string(),
        (Lang::Ar, "projectDetails.baths") => "حمامات".to_string(),
        (Lang::En, "projectDetails.forSale") => "For Sale".to_string(),
        (Lang::He, "projectDetails.forSale") => "למכירה".to_string(),
        (Lang::Ar, "projectDetails.forSale") => "للبيع".to_string(),
        (Lang::En, "projectDetails.forRent") => "For Rent".to_string(),
        (Lang::He, "projectDetails.forRent") => "להשכרה".to_string(),
        (Lang::Ar, "projectDetails.forRent") => "للإيجار".to_string(),
        (Lang::En, "projectDetails.sold") => "Sold".to_string(),
        (Lang::He, "projectDetails.sold") => "נמכר".to_string(),
        (Lang::Ar, "projectDetails.sold") => "مباع".to_string(),
        (Lang::En, "projectDetails.features") => "Features".to_string(),
        (Lang::He, "projectDetails.features") => "מאפיינים".to_string(),
        (Lang::Ar, "projectDetails.features") => "المميزات".to_string(),
        (Lang::En, "projectDetails.moreImages") => "more".to_string(),
        (Lang::He, "projectDetails.moreImages") => "נוספות".to_string(),
        (Lang::Ar, "projectDetails.moreImages") => "المزيد".to_string(),
        (Lang::En, "projectDetails.contact") => "Contact Us About This Property".to_string(),
        (Lang::He, "projectDetails.contact") => "צרו קשר לגבי הנכס".to_string(),
        (Lang::Ar, "projectDetails.contact") => "تواصل معنا بخصوص هذا العقار".to_string(),

        // Team
        (Lang::En, "team.title") => "Meet Our Team".to_string(),
        (Lang::He, "team.title") => "הכירו את הצוות".to_string(),
        (Lang::Ar, "team.title") => "تعرف على فريقنا".to_string(),
        (Lang::En, "team.subtitle") => "The dedicated professionals behind ALL IN Real Estate".to_string(),
        (Lang::He, "team.subtitle") => "אנשי המקצוע שמאחורי ALL IN נדל\"ן".to_string(),
        (Lang::Ar, "team.subtitle") => "المحترفون وراء ALL IN العقارية".to_string(),
        (Lang::En, "team.error") => "Could not load the team".to_string(),
        (Lang::He, "team.error") => "טעינת הצוות נכשלה".to_string(),
        (Lang::Ar, "team.error") => "تعذر تحميل الفريق".to_string(),
        (Lang::En, "team.empty") => "No team members found".to_string(),
        (Lang::He, "team.empty") => "לא נמצאו חברי צוות".to_string(),
        (Lang::Ar, "team.empty") => "لم يتم العثور على أعضاء الفريق".to_string(),
        (Lang::En, "team.license") => "License".to_string(),
        (Lang::He, "team.license") => "רישיון".to_string(),
        (Lang::Ar, "team.license") => "رخصة".to_string(),

        // Courses
        (Lang::En, "courses.title") => "Educational Courses".to_string(),
        (Lang::He, "courses.title") => "קורסים מקצועיים".to_string(),
        (Lang::Ar, "courses.title") => "دورات تعليمية".to_string(),
        (Lang::En, "courses.subtitle") => {
            "Expand your real estate knowledge with our expert-led masterclasses.".to_string()
        }
        (Lang::He, "courses.subtitle") => {
            "הרחיבו את הידע שלכם בנדל\"ן עם קורסים בהנחיית מומחים.".to_string()
        }
        (Lang::Ar, "courses.subtitle") => {
            "وسّع معرفتك العقارية مع دوراتنا بقيادة الخبراء.".to_string()
        }
        (Lang::En, "courses.loading") => "Loading courses...".to_string(),
        (Lang::En, "courses.error") => "Could not load courses".to_string(),
        (Lang::He, "courses.error") => "טעינת הקורסים נכשלה".to_string(),
        (Lang::Ar, "courses.error") => "تعذر تحميل الدورات".to_string(),
        (Lang::En, "courses.empty") => "No courses available right now".to_string(),
        (Lang::He, "courses.empty") => "אין קורסים זמינים כרגע".to_string(),
        (Lang::Ar, "courses.empty") => "لا توجد دورات متاحة حاليًا".to_string(),
        (Lang::En, "courses.free") => "Free".to_string(),
        (Lang::He, "courses.free") => "חינם".to_string(),
        (Lang::Ar, "courses.free") => "مجاني".to_string(),

        // Footer / legal
        (Lang::En, "footer.rights") => "All rights reserved".to_string(),
        (Lang::He, "footer.rights") => "כל הזכויות שמורות".to_string(),
        (Lang::Ar, "footer.rights") => "جميع الحقوق محفوظة".to_string(),
        (Lang::En, "footer.privacy") => "Privacy Policy".to_string(),
        (Lang::He, "footer.privacy") => "מדיניות פרטיות".to_string(),
        (Lang::Ar, "footer.privacy") => "سياسة الخصوصية".to_string(),
        (Lang::En, "footer.terms") => "Terms of Use".to_string(),
        (Lang::He, "footer.terms") => "תנאי שימוש".to_string(),
        (Lang::Ar, "footer.terms") => "شروط الاستخدام".to_string(),
        (Lang::En, "footer.cookies") => "Cookie Policy".to_string(),
        (Lang::He, "footer.cookies") => "מדיניות עוגיות".to_string(),
        (Lang::Ar, "footer.cookies") => "سياسة ملفات تعريف الارتباط".to_string(),

        // Legal pages (He/Ar fall back to English body text)
        (Lang::En, "legal.updated") => "Last updated: January 2025".to_string(),
        (Lang::En, "legal.privacy.intro") => {
            "ALL IN collects only the information you submit through our contact form: your name, email address, phone number, and message. We use it solely to respond to your inquiry.".to_string()
        }
        (Lang::En, "legal.privacy.data") => {
            "Your details are stored securely by our backend provider and are never sold or shared with third parties for marketing purposes.".to_string()
        }
        (Lang::En, "legal.privacy.contact") => {
            "To request access to or deletion of your personal data, contact us through the form on the home page.".to_string()
        }
        (Lang::En, "legal.terms.intro") => {
            "By using this website you agree to these terms. Listings are presented for information only and do not constitute a binding offer.".to_string()
        }
        (Lang::En, "legal.terms.content") => {
            "Property details, prices, and availability may change without notice. Always verify current information with our agents before making decisions.".to_string()
        }
        (Lang::En, "legal.terms.liability") => {
            "ALL IN is not liable for decisions made on the basis of information displayed on this site.".to_string()
        }
        (Lang::En, "legal.cookies.intro") => {
            "This site stores a small amount of data in your browser: your language preference and, for administrators, a login session.".to_string()
        }
        (Lang::En, "legal.cookies.usage") => {
            "We do not use tracking or advertising cookies. Embedded maps may set their own cookies, governed by their providers' policies.".to_string()
        }
        (Lang::En, "legal.cookies.manage") => {
            "You can clear stored data at any time through your browser settings.".to_string()
        }

        // Not found
        (Lang::En, "notFound.title") => "Page not found".to_string(),
        (Lang::He, "notFound.title") => "הדף לא נמצא".to_string(),
        (Lang::Ar, "notFound.title") => "الصفحة غير موجودة".to_string(),
        (Lang::En, "notFound.home") => "Go Home".to_string(),
        (Lang::He, "notFound.home") => "לדף הבית".to_string(),
        (Lang::Ar, "notFound.home") => "إلى الرئيسية".to_string(),

        // Admin
        (Lang::En, "admin.login.title") => "Admin Login".to_string(),
        (Lang::En, "admin.login.email") => "Email".to_string(),
        (Lang::En, "admin.login.password") => "Password".to_string(),
        (Lang::En, "admin.login.submit") => "Sign In".to_string(),
        (Lang::En, "admin.login.signingIn") => "Signing in...".to_string(),
        (Lang::En, "admin.leads.title") => "Leads".to_string(),
        (Lang::En, "admin.leads.logout") => "Log Out".to_string(),
        (Lang::En, "admin.leads.empty") => "No leads match the current filters".to_string(),
        (Lang::En, "admin.leads.markContacted") => "Mark Contacted".to_string(),
        (Lang::En, "admin.leads.close") => "Close Lead".to_string(),
        (Lang::En, "admin.leads.delete") => "Delete lead".to_string(),
        (Lang::En, "admin.leads.deletePrompt") => "Delete this lead?".to_string(),
        (Lang::En, "admin.leads.deleteYes") => "Delete".to_string(),
        (Lang::En, "admin.leads.deleteNo") => "Keep".to_string(),
        (Lang::En, "admin.leads.error") => "Failed to load leads".to_string(),
        (Lang::En, "admin.leads.stats.total") => "Total".to_string(),
        (Lang::En, "admin.leads.stats.new") => "New".to_string(),
        (Lang::En, "admin.leads.stats.contacted") => "Contacted".to_string(),
        (Lang::En, "admin.leads.stats.closed") => "Closed".to_string(),

        // Fallback: English string if present, else echo the key
        (Lang::He | Lang::Ar, k) => t(Lang::En, k),
        (Lang::En, _) => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_codes_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("HE-IL"), Some(Lang::He));
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn test_rtl_languages() {
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::He.dir(), "rtl");
        assert_eq!(Lang::Ar.dir(), "rtl");
    }

    #[test]
    fn test_translations_present_per_language() {
        assert_eq!(t(Lang::En, "projects.filters.forRent"), "For Rent");
        assert_eq!(t(Lang::He, "projects.filters.forRent"), "להשכרה");
        assert_eq!(t(Lang::Ar, "projects.filters.forRent"), "للإيجار");
    }

    #[test]
    fn test_load_failures_have_distinct_messages() {
        // Error strings exist per language and differ from the empty ones
        for lang in Lang::ALL {
            for page in ["team", "courses"] {
                let error = t(lang, &format!("{page}.error"));
                let empty = t(lang, &format!("{page}.empty"));
                assert_ne!(error, empty);
                assert!(!error.contains('.'), "key echoed: {error}");
            }
        }
    }

    #[test]
    fn test_fallback_to_english_then_key() {
        // Admin strings only exist in English
        assert_eq!(t(Lang::He, "admin.login.title"), t(Lang::En, "admin.login.title"));
        // Missing everywhere echoes the key
        assert_eq!(t(Lang::Ar, "missing.key"), "missing.key");
    }

    #[test]
    fn test_lead_delete_strings_resolve_everywhere() {
        for lang in Lang::ALL {
            assert_eq!(t(lang, "admin.leads.deletePrompt"), "Delete this lead?");
            assert_ne!(t(lang, "admin.leads.deleteYes"), t(lang, "admin.leads.deleteNo"));
        }
    }
}
