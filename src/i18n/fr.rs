//! French translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Navigation
    t.insert("about".into(), "\u{00C0} propos".into());
    t.insert("services".into(), "Services".into());
    t.insert("careers".into(), "Carri\u{00E8}res".into());
    t.insert("contact".into(), "Contact".into());
    t.insert("language".into(), "Langue".into());
    t.insert("loading".into(), "Chargement...".into());
    t.insert("closeBanner".into(), "Fermer la banni\u{00E8}re".into());

    // Hero
    t.insert("professionalCallCenter".into(), "Centre d'appels professionnel".into());
    t.insert("heroTitle".into(), "Connect Pro Group".into());
    t.insert("heroSubtitle".into(), "Votre partenaire pour la communication client".into());
    t.insert("heroDescription".into(), "Nous proposons des services de centre d'appels multilingues qui satisfont vos clients 24 heures sur 24.".into());
    t.insert("contactUs".into(), "Contactez-nous".into());
    t.insert("ourServices".into(), "Nos services".into());
    t.insert("callCenterImage".into(), "\u{00C9}quipe du centre d'appels au travail".into());
    t.insert("yearsExperience".into(), "Ann\u{00E9}es d'exp\u{00E9}rience".into());
    t.insert("support247".into(), "Support 24/7".into());
    t.insert("premiumService".into(), "Service premium".into());
    t.insert("alwaysAvailable".into(), "Toujours disponibles pour vous".into());

    // About
    t.insert("aboutTitle".into(), "\u{00C0} propos de nous".into());
    t.insert("aboutDescription".into(), "Connect Pro Group est un centre d'appels bas\u{00E9} \u{00E0} Tirana qui accompagne des entreprises de toute l'Europe avec un service client fiable et multilingue.".into());
    t.insert("mission".into(), "Notre mission".into());
    t.insert("missionText".into(), "Faire de chaque contact client une exp\u{00E9}rience positive pour nos partenaires.".into());
    t.insert("vision".into(), "Notre vision".into());
    t.insert("visionText".into(), "\u{00CA}tre le centre d'appels de r\u{00E9}f\u{00E9}rence de la r\u{00E9}gion pour la qualit\u{00E9} et la confiance.".into());
    t.insert("clientSatisfaction".into(), "Satisfaction client".into());
    t.insert("activeClients".into(), "Clients actifs".into());
    t.insert("values".into(), "Nos valeurs".into());
    t.insert("professionalism".into(), "Professionnalisme".into());
    t.insert("professionalismText".into(), "Des agents form\u{00E9}s qui traitent chaque demande avec soin.".into());
    t.insert("innovation".into(), "Innovation".into());
    t.insert("innovationText".into(), "Des outils et processus modernes pour un support plus rapide.".into());
    t.insert("excellence".into(), "Excellence".into());
    t.insert("excellenceText".into(), "Des exigences \u{00E9}lev\u{00E9}es mesur\u{00E9}es \u{00E0} chaque appel.".into());

    // Services
    t.insert("servicesTitle".into(), "Nos services".into());
    t.insert("servicesDescription".into(), "Des solutions d'externalisation compl\u{00E8}tes pour votre communication client.".into());
    t.insert("customerService".into(), "Service client".into());
    t.insert("customerServiceDesc".into(), "Traitement aimable et comp\u{00E9}tent des demandes par t\u{00E9}l\u{00E9}phone, e-mail et chat.".into());
    t.insert("technicalSupport".into(), "Support technique".into());
    t.insert("technicalSupportDesc".into(), "Support de premier et second niveau pour vos produits et services.".into());
    t.insert("crmManagement".into(), "Gestion CRM".into());
    t.insert("crmManagementDesc".into(), "Entretien de vos donn\u{00E9}es et relations clients.".into());
    t.insert("salesSupport".into(), "Support commercial".into());
    t.insert("salesSupportDesc".into(), "Ventes entrantes et sortantes pour augmenter votre chiffre d'affaires.".into());
    t.insert("appointmentSupport".into(), "Prise de rendez-vous".into());
    t.insert("appointmentSupportDesc".into(), "R\u{00E9}servation, confirmation et report de rendez-vous pour vos clients.".into());
    t.insert("surveysMarketResearch".into(), "Enqu\u{00EA}tes et \u{00E9}tudes de march\u{00E9}".into());
    t.insert("surveysMarketResearchDesc".into(), "Enqu\u{00EA}tes t\u{00E9}l\u{00E9}phoniques pour des informations de march\u{00E9} fiables.".into());
    t.insert("orderProcessing".into(), "Traitement des commandes".into());
    t.insert("orderProcessingDesc".into(), "Traitement rapide et pr\u{00E9}cis des commandes, retours et r\u{00E9}clamations.".into());
    t.insert("contentModeration".into(), "Mod\u{00E9}ration de contenu".into());
    t.insert("contentModerationDesc".into(), "V\u{00E9}rification des contenus utilisateurs pour des plateformes s\u{00FB}res.".into());
    t.insert("backOfficeServices".into(), "Services de back-office".into());
    t.insert("backOfficeServicesDesc".into(), "Saisie de donn\u{00E9}es, traitement de documents et t\u{00E2}ches administratives.".into());
    t.insert("previousSlide".into(), "Diapositive pr\u{00E9}c\u{00E9}dente".into());
    t.insert("nextSlide".into(), "Diapositive suivante".into());
    t.insert("goToSlide".into(), "Aller \u{00E0} la diapositive".into());

    // Partners
    t.insert("partnersTitle".into(), "Nos partenaires".into());
    t.insert("partnersDescription".into(), "Des entreprises de premier plan nous confient leurs clients.".into());
    t.insert("vodafoneTitle".into(), "Vodafone".into());
    t.insert("vodafoneDesc".into(), "T\u{00E9}l\u{00E9}communications".into());
    t.insert("sigalTitle".into(), "Sigal".into());
    t.insert("sigalDesc".into(), "Assurances".into());
    t.insert("credinsTitle".into(), "Credins Bank".into());
    t.insert("credinsDesc".into(), "Banque".into());
    t.insert("balfinTitle".into(), "Balfin Group".into());
    t.insert("balfinDesc".into(), "Investissements".into());
    t.insert("wideExperience".into(), "Large exp\u{00E9}rience".into());
    t.insert("wideExperienceText".into(), "Des projets dans les t\u{00E9}l\u{00E9}coms, la finance et le commerce.".into());
    t.insert("manyPartners".into(), "De nombreux partenaires".into());
    t.insert("manyPartnersText".into(), "Une coop\u{00E9}ration durable avec des marques reconnues.".into());
    t.insert("support24_7".into(), "Support 24/7".into());
    t.insert("support24_7Text".into(), "Notre \u{00E9}quipe est l\u{00E0} pour vos clients jour et nuit.".into());

    // Careers
    t.insert("careersTitle".into(), "Carri\u{00E8}res".into());
    t.insert("careersDescription".into(), "Rejoignez notre \u{00E9}quipe et grandissez avec nous.".into());
    t.insert("customerServicePosition".into(), "Agent du service client".into());
    t.insert("customerServiceRoleDesc".into(), "Aidez les clients de nos partenaires par t\u{00E9}l\u{00E9}phone et e-mail.".into());
    t.insert("albanianEnglishRequired".into(), "Albanais et anglais courants".into());
    t.insert("communicationSkills".into(), "Excellentes comp\u{00E9}tences en communication".into());
    t.insert("customerServiceExp".into(), "Une exp\u{00E9}rience en service client est un plus".into());
    t.insert("shiftWork".into(), "Disponibilit\u{00E9} pour le travail post\u{00E9}".into());
    t.insert("technicalSupportPosition".into(), "Agent de support technique".into());
    t.insert("technicalSupportRoleDesc".into(), "R\u{00E9}solvez les probl\u{00E8}mes techniques des utilisateurs.".into());
    t.insert("itDegree".into(), "Dipl\u{00F4}me en informatique ou domaine connexe".into());
    t.insert("technicalKnowledge".into(), "Solides connaissances techniques".into());
    t.insert("problemSolving".into(), "Capacit\u{00E9} \u{00E0} r\u{00E9}soudre les probl\u{00E8}mes".into());
    t.insert("technicalSupportExp".into(), "Exp\u{00E9}rience en support technique".into());
    t.insert("fullName".into(), "Nom complet".into());
    t.insert("phoneNumber".into(), "Num\u{00E9}ro de t\u{00E9}l\u{00E9}phone".into());
    t.insert("position".into(), "Poste".into());
    t.insert("selectPosition".into(), "Choisissez un poste".into());
    t.insert("uploadCV".into(), "T\u{00E9}l\u{00E9}charger le CV".into());
    t.insert("sendApplication".into(), "Envoyer la candidature".into());

    // Contact
    t.insert("contactTitle".into(), "Contact".into());
    t.insert("contactDescription".into(), "Prenez contact avec nous. Nous avons h\u{00E2}te de vous lire.".into());
    t.insert("phone".into(), "T\u{00E9}l\u{00E9}phone".into());
    t.insert("email".into(), "E-mail".into());
    t.insert("address".into(), "Adresse".into());
    t.insert("name".into(), "Nom".into());
    t.insert("message".into(), "Message".into());
    t.insert("sendMessage".into(), "Envoyer le message".into());
    t.insert("socialFollow".into(), "Suivez-nous".into());

    t
}
