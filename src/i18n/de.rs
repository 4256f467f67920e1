//! German translations
//!
//! German is the fallback language, so this table must hold every key
//! the views use.

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Navigation
    t.insert("about".into(), "\u{00DC}ber uns".into());
    t.insert("services".into(), "Dienstleistungen".into());
    t.insert("careers".into(), "Karriere".into());
    t.insert("contact".into(), "Kontakt".into());
    t.insert("language".into(), "Sprache".into());
    t.insert("loading".into(), "Wird geladen...".into());
    t.insert("closeBanner".into(), "Banner schlie\u{00DF}en".into());

    // Hero
    t.insert("professionalCallCenter".into(), "Professionelles Callcenter".into());
    t.insert("heroTitle".into(), "Connect Pro Group".into());
    t.insert("heroSubtitle".into(), "Ihr Partner f\u{00FC}r Kundenkommunikation".into());
    t.insert("heroDescription".into(), "Wir bieten mehrsprachige Callcenter-Dienstleistungen, die Ihre Kunden rund um die Uhr zufriedenstellen.".into());
    t.insert("contactUs".into(), "Kontaktieren Sie uns".into());
    t.insert("ourServices".into(), "Unsere Dienstleistungen".into());
    t.insert("callCenterImage".into(), "Callcenter-Team bei der Arbeit".into());
    t.insert("yearsExperience".into(), "Jahre Erfahrung".into());
    t.insert("support247".into(), "24/7 Support".into());
    t.insert("premiumService".into(), "Premium-Service".into());
    t.insert("alwaysAvailable".into(), "Immer f\u{00FC}r Sie erreichbar".into());

    // About
    t.insert("aboutTitle".into(), "\u{00DC}ber uns".into());
    t.insert("aboutDescription".into(), "Connect Pro Group ist ein Callcenter mit Sitz in Tirana, das Unternehmen in ganz Europa mit zuverl\u{00E4}ssigem, mehrsprachigem Kundenservice unterst\u{00FC}tzt.".into());
    t.insert("mission".into(), "Unsere Mission".into());
    t.insert("missionText".into(), "Jeden Kundenkontakt zu einem positiven Erlebnis f\u{00FC}r unsere Partner zu machen.".into());
    t.insert("vision".into(), "Unsere Vision".into());
    t.insert("visionText".into(), "Das f\u{00FC}hrende Callcenter der Region f\u{00FC}r Qualit\u{00E4}t und Vertrauen zu sein.".into());
    t.insert("clientSatisfaction".into(), "Kundenzufriedenheit".into());
    t.insert("activeClients".into(), "Aktive Kunden".into());
    t.insert("values".into(), "Unsere Werte".into());
    t.insert("professionalism".into(), "Professionalit\u{00E4}t".into());
    t.insert("professionalismText".into(), "Geschulte Mitarbeiter, die jede Anfrage sorgf\u{00E4}ltig bearbeiten.".into());
    t.insert("innovation".into(), "Innovation".into());
    t.insert("innovationText".into(), "Moderne Werkzeuge und Prozesse f\u{00FC}r schnelleren Support.".into());
    t.insert("excellence".into(), "Exzellenz".into());
    t.insert("excellenceText".into(), "Hohe Standards, gemessen bei jedem einzelnen Anruf.".into());

    // Services
    t.insert("servicesTitle".into(), "Unsere Dienstleistungen".into());
    t.insert("servicesDescription".into(), "Komplette Outsourcing-L\u{00F6}sungen f\u{00FC}r Ihre Kundenkommunikation.".into());
    t.insert("customerService".into(), "Kundenservice".into());
    t.insert("customerServiceDesc".into(), "Freundliche, kompetente Bearbeitung von Kundenanfragen per Telefon, E-Mail und Chat.".into());
    t.insert("technicalSupport".into(), "Technischer Support".into());
    t.insert("technicalSupportDesc".into(), "First- und Second-Level-Support f\u{00FC}r Ihre Produkte und Dienste.".into());
    t.insert("crmManagement".into(), "CRM-Management".into());
    t.insert("crmManagementDesc".into(), "Pflege Ihrer Kundendaten und Kundenbeziehungen.".into());
    t.insert("salesSupport".into(), "Vertriebsunterst\u{00FC}tzung".into());
    t.insert("salesSupportDesc".into(), "Inbound- und Outbound-Vertrieb, der Ihren Umsatz steigert.".into());
    t.insert("appointmentSupport".into(), "Terminvereinbarung".into());
    t.insert("appointmentSupportDesc".into(), "Buchen, Best\u{00E4}tigen und Verschieben von Terminen f\u{00FC}r Ihre Kunden.".into());
    t.insert("surveysMarketResearch".into(), "Umfragen & Marktforschung".into());
    t.insert("surveysMarketResearchDesc".into(), "Telefonische Umfragen f\u{00FC}r verl\u{00E4}ssliche Markteinblicke.".into());
    t.insert("orderProcessing".into(), "Auftragsabwicklung".into());
    t.insert("orderProcessingDesc".into(), "Schnelle und genaue Bearbeitung von Bestellungen, Retouren und Reklamationen.".into());
    t.insert("contentModeration".into(), "Content-Moderation".into());
    t.insert("contentModerationDesc".into(), "Pr\u{00FC}fung von Nutzerinhalten f\u{00FC}r sichere Plattformen.".into());
    t.insert("backOfficeServices".into(), "Backoffice-Dienste".into());
    t.insert("backOfficeServicesDesc".into(), "Datenerfassung, Dokumentenbearbeitung und Verwaltungsaufgaben.".into());
    t.insert("previousSlide".into(), "Vorherige Folie".into());
    t.insert("nextSlide".into(), "N\u{00E4}chste Folie".into());
    t.insert("goToSlide".into(), "Gehe zu Folie".into());

    // Partners
    t.insert("partnersTitle".into(), "Unsere Partner".into());
    t.insert("partnersDescription".into(), "F\u{00FC}hrende Unternehmen vertrauen uns ihre Kunden an.".into());
    t.insert("vodafoneTitle".into(), "Vodafone".into());
    t.insert("vodafoneDesc".into(), "Telekommunikation".into());
    t.insert("sigalTitle".into(), "Sigal".into());
    t.insert("sigalDesc".into(), "Versicherungen".into());
    t.insert("credinsTitle".into(), "Credins Bank".into());
    t.insert("credinsDesc".into(), "Bankwesen".into());
    t.insert("balfinTitle".into(), "Balfin Group".into());
    t.insert("balfinDesc".into(), "Investitionen".into());
    t.insert("wideExperience".into(), "Breite Erfahrung".into());
    t.insert("wideExperienceText".into(), "Projekte in Telekommunikation, Finanzen und Handel.".into());
    t.insert("manyPartners".into(), "Viele Partner".into());
    t.insert("manyPartnersText".into(), "Langfristige Zusammenarbeit mit bekannten Marken.".into());
    t.insert("support24_7".into(), "24/7 Support".into());
    t.insert("support24_7Text".into(), "Unser Team ist Tag und Nacht f\u{00FC}r Ihre Kunden da.".into());

    // Careers
    t.insert("careersTitle".into(), "Karriere".into());
    t.insert("careersDescription".into(), "Werden Sie Teil unseres Teams und wachsen Sie mit uns.".into());
    t.insert("customerServicePosition".into(), "Kundenservice-Mitarbeiter".into());
    t.insert("customerServiceRoleDesc".into(), "Betreuen Sie die Kunden unserer Partner per Telefon und E-Mail.".into());
    t.insert("albanianEnglishRequired".into(), "Flie\u{00DF}end Albanisch und Englisch".into());
    t.insert("communicationSkills".into(), "Ausgepr\u{00E4}gte Kommunikationsf\u{00E4}higkeit".into());
    t.insert("customerServiceExp".into(), "Erfahrung im Kundenservice ist von Vorteil".into());
    t.insert("shiftWork".into(), "Bereitschaft zur Schichtarbeit".into());
    t.insert("technicalSupportPosition".into(), "Technischer Support-Mitarbeiter".into());
    t.insert("technicalSupportRoleDesc".into(), "L\u{00F6}sen Sie technische Probleme f\u{00FC}r Endnutzer.".into());
    t.insert("itDegree".into(), "Abschluss in IT oder einem verwandten Bereich".into());
    t.insert("technicalKnowledge".into(), "Fundierte technische Kenntnisse".into());
    t.insert("problemSolving".into(), "Probleml\u{00F6}sungsf\u{00E4}higkeit".into());
    t.insert("technicalSupportExp".into(), "Erfahrung im technischen Support".into());
    t.insert("fullName".into(), "Vollst\u{00E4}ndiger Name".into());
    t.insert("phoneNumber".into(), "Telefonnummer".into());
    t.insert("position".into(), "Position".into());
    t.insert("selectPosition".into(), "Position ausw\u{00E4}hlen".into());
    t.insert("uploadCV".into(), "Lebenslauf hochladen".into());
    t.insert("sendApplication".into(), "Bewerbung senden".into());

    // Contact
    t.insert("contactTitle".into(), "Kontakt".into());
    t.insert("contactDescription".into(), "Nehmen Sie Kontakt mit uns auf. Wir freuen uns auf Ihre Nachricht.".into());
    t.insert("phone".into(), "Telefon".into());
    t.insert("email".into(), "E-Mail".into());
    t.insert("address".into(), "Adresse".into());
    t.insert("name".into(), "Name".into());
    t.insert("message".into(), "Nachricht".into());
    t.insert("sendMessage".into(), "Nachricht senden".into());
    t.insert("socialFollow".into(), "Folgen Sie uns".into());

    t
}
