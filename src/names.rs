//! Names for well-known object identifiers.
//!
//! This is a private module. Its public items are re-exported by the parent.


//------------ OidNames ------------------------------------------------------

/// A type that knows human readable names for object identifiers.
///
/// The decoder asks for a name for each OBJECT IDENTIFIER and RELATIVE-OID
/// value it encounters. If there is one, it is added as a comment line.
pub trait OidNames {
    /// Returns the name of the object identifier in dotted form, if known.
    fn name(&self, oid: &str) -> Option<&str>;
}

impl<T: OidNames + ?Sized> OidNames for &T {
    fn name(&self, oid: &str) -> Option<&str> {
        (**self).name(oid)
    }
}


//------------ NoNames -------------------------------------------------------

/// An OID name lookup that never knows any names.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNames;

impl OidNames for NoNames {
    fn name(&self, _oid: &str) -> Option<&str> {
        None
    }
}


//------------ KnownOids -----------------------------------------------------

/// A static table of object identifiers common in certificates and keys.
///
/// The table covers X.500 attribute types, X.509 certificate extensions,
/// PKIX key purposes and access methods, PKCS #1, #7, #9, and #12
/// identifiers, hash and signature algorithms, and named elliptic curves.
#[derive(Clone, Copy, Debug, Default)]
pub struct KnownOids;

impl KnownOids {
    /// Returns the name of the object identifier in dotted form, if known.
    pub fn lookup(oid: &str) -> Option<&'static str> {
        let res = match oid {
            // X.500 attribute types
            "2.5.4.3" => "commonName",
            "2.5.4.4" => "surname",
            "2.5.4.5" => "serialNumber",
            "2.5.4.6" => "countryName",
            "2.5.4.7" => "localityName",
            "2.5.4.8" => "stateOrProvinceName",
            "2.5.4.9" => "streetAddress",
            "2.5.4.10" => "organizationName",
            "2.5.4.11" => "organizationalUnitName",
            "2.5.4.12" => "title",
            "2.5.4.13" => "description",
            "2.5.4.15" => "businessCategory",
            "2.5.4.17" => "postalCode",
            "2.5.4.41" => "name",
            "2.5.4.42" => "givenName",
            "2.5.4.43" => "initials",
            "2.5.4.44" => "generationQualifier",
            "2.5.4.45" => "uniqueIdentifier",
            "2.5.4.46" => "dnQualifier",
            "2.5.4.65" => "pseudonym",
            "2.5.4.97" => "organizationIdentifier",
            "0.9.2342.19200300.100.1.1" => "userId",
            "0.9.2342.19200300.100.1.25" => "domainComponent",

            // X.509 certificate extensions
            "2.5.29.9" => "subjectDirectoryAttributes",
            "2.5.29.14" => "subjectKeyIdentifier",
            "2.5.29.15" => "keyUsage",
            "2.5.29.16" => "privateKeyUsagePeriod",
            "2.5.29.17" => "subjectAltName",
            "2.5.29.18" => "issuerAltName",
            "2.5.29.19" => "basicConstraints",
            "2.5.29.20" => "cRLNumber",
            "2.5.29.21" => "cRLReason",
            "2.5.29.23" => "holdInstructionCode",
            "2.5.29.24" => "invalidityDate",
            "2.5.29.27" => "deltaCRLIndicator",
            "2.5.29.28" => "issuingDistributionPoint",
            "2.5.29.29" => "certificateIssuer",
            "2.5.29.30" => "nameConstraints",
            "2.5.29.31" => "cRLDistributionPoints",
            "2.5.29.32" => "certificatePolicies",
            "2.5.29.32.0" => "anyPolicy",
            "2.5.29.33" => "policyMappings",
            "2.5.29.35" => "authorityKeyIdentifier",
            "2.5.29.36" => "policyConstraints",
            "2.5.29.37" => "extKeyUsage",
            "2.5.29.37.0" => "anyExtendedKeyUsage",
            "2.5.29.46" => "freshestCRL",
            "2.5.29.54" => "inhibitAnyPolicy",

            // PKIX
            "1.3.6.1.5.5.7.1.1" => "authorityInfoAccess",
            "1.3.6.1.5.5.7.1.3" => "qcStatements",
            "1.3.6.1.5.5.7.1.11" => "subjectInfoAccess",
            "1.3.6.1.5.5.7.2.1" => "cps",
            "1.3.6.1.5.5.7.2.2" => "unotice",
            "1.3.6.1.5.5.7.3.1" => "serverAuth",
            "1.3.6.1.5.5.7.3.2" => "clientAuth",
            "1.3.6.1.5.5.7.3.3" => "codeSigning",
            "1.3.6.1.5.5.7.3.4" => "emailProtection",
            "1.3.6.1.5.5.7.3.8" => "timeStamping",
            "1.3.6.1.5.5.7.3.9" => "OCSPSigning",
            "1.3.6.1.5.5.7.48.1" => "ocsp",
            "1.3.6.1.5.5.7.48.1.1" => "ocspBasic",
            "1.3.6.1.5.5.7.48.1.2" => "ocspNonce",
            "1.3.6.1.5.5.7.48.1.5" => "ocspNoCheck",
            "1.3.6.1.5.5.7.48.2" => "caIssuers",
            "1.3.6.1.5.5.7.48.3" => "timeStamping",
            "1.3.6.1.5.5.7.48.5" => "caRepository",
            "1.3.6.1.5.5.7.48.10" => "rpkiManifest",
            "1.3.6.1.5.5.7.48.11" => "signedObject",
            "1.3.6.1.5.5.7.48.13" => "rpkiNotify",
            "1.3.6.1.4.1.11129.2.4.2" => "ctPrecertificateSCTs",
            "1.3.6.1.4.1.11129.2.4.3" => "ctPrecertificatePoison",

            // PKCS #1
            "1.2.840.113549.1.1.1" => "rsaEncryption",
            "1.2.840.113549.1.1.2" => "md2WithRSAEncryption",
            "1.2.840.113549.1.1.4" => "md5WithRSAEncryption",
            "1.2.840.113549.1.1.5" => "sha1WithRSAEncryption",
            "1.2.840.113549.1.1.7" => "id-RSAES-OAEP",
            "1.2.840.113549.1.1.8" => "id-mgf1",
            "1.2.840.113549.1.1.10" => "id-RSASSA-PSS",
            "1.2.840.113549.1.1.11" => "sha256WithRSAEncryption",
            "1.2.840.113549.1.1.12" => "sha384WithRSAEncryption",
            "1.2.840.113549.1.1.13" => "sha512WithRSAEncryption",
            "1.2.840.113549.1.1.14" => "sha224WithRSAEncryption",

            // PKCS #5
            "1.2.840.113549.1.5.12" => "PBKDF2",
            "1.2.840.113549.1.5.13" => "PBES2",

            // PKCS #7 and CMS
            "1.2.840.113549.1.7.1" => "data",
            "1.2.840.113549.1.7.2" => "signedData",
            "1.2.840.113549.1.7.3" => "envelopedData",
            "1.2.840.113549.1.7.5" => "digestedData",
            "1.2.840.113549.1.7.6" => "encryptedData",
            "1.2.840.113549.1.9.16.1.4" => "tSTInfo",
            "1.2.840.113549.1.9.16.1.24" => "routeOriginAuthz",
            "1.2.840.113549.1.9.16.1.26" => "rpkiManifest",

            // PKCS #9
            "1.2.840.113549.1.9.1" => "emailAddress",
            "1.2.840.113549.1.9.2" => "unstructuredName",
            "1.2.840.113549.1.9.3" => "contentType",
            "1.2.840.113549.1.9.4" => "messageDigest",
            "1.2.840.113549.1.9.5" => "signingTime",
            "1.2.840.113549.1.9.6" => "countersignature",
            "1.2.840.113549.1.9.7" => "challengePassword",
            "1.2.840.113549.1.9.14" => "extensionRequest",
            "1.2.840.113549.1.9.15" => "smimeCapabilities",
            "1.2.840.113549.1.9.20" => "friendlyName",
            "1.2.840.113549.1.9.21" => "localKeyID",
            "1.2.840.113549.1.9.22.1" => "x509Certificate",

            // PKCS #12
            "1.2.840.113549.1.12.1.3" => "pbeWithSHAAnd3-KeyTripleDES-CBC",
            "1.2.840.113549.1.12.1.6" => "pbeWithSHAAnd40BitRC2-CBC",
            "1.2.840.113549.1.12.10.1.1" => "keyBag",
            "1.2.840.113549.1.12.10.1.2" => "pkcs8ShroudedKeyBag",
            "1.2.840.113549.1.12.10.1.3" => "certBag",
            "1.2.840.113549.1.12.10.1.4" => "crlBag",
            "1.2.840.113549.1.12.10.1.5" => "secretBag",
            "1.2.840.113549.1.12.10.1.6" => "safeContentsBag",

            // Hash algorithms
            "1.2.840.113549.2.5" => "md5",
            "1.2.840.113549.2.7" => "hmacWithSHA1",
            "1.2.840.113549.2.9" => "hmacWithSHA256",
            "1.3.14.3.2.26" => "sha1",
            "2.16.840.1.101.3.4.2.1" => "sha256",
            "2.16.840.1.101.3.4.2.2" => "sha384",
            "2.16.840.1.101.3.4.2.3" => "sha512",
            "2.16.840.1.101.3.4.2.4" => "sha224",
            "2.16.840.1.101.3.4.2.8" => "sha3-256",
            "2.16.840.1.101.3.4.2.9" => "sha3-384",
            "2.16.840.1.101.3.4.2.10" => "sha3-512",

            // Symmetric ciphers
            "1.2.840.113549.3.7" => "des-ede3-cbc",
            "2.16.840.1.101.3.4.1.2" => "aes128-CBC",
            "2.16.840.1.101.3.4.1.6" => "aes128-GCM",
            "2.16.840.1.101.3.4.1.22" => "aes192-CBC",
            "2.16.840.1.101.3.4.1.42" => "aes256-CBC",
            "2.16.840.1.101.3.4.1.46" => "aes256-GCM",

            // Signature algorithms
            "1.2.840.10040.4.1" => "dsa",
            "1.2.840.10040.4.3" => "dsa-with-sha1",
            "2.16.840.1.101.3.4.3.2" => "dsa-with-sha256",
            "1.2.840.10045.4.1" => "ecdsa-with-SHA1",
            "1.2.840.10045.4.3.2" => "ecdsa-with-SHA256",
            "1.2.840.10045.4.3.3" => "ecdsa-with-SHA384",
            "1.2.840.10045.4.3.4" => "ecdsa-with-SHA512",
            "1.3.101.112" => "Ed25519",
            "1.3.101.113" => "Ed448",
            "1.3.101.110" => "X25519",
            "1.3.101.111" => "X448",

            // Elliptic curves
            "1.2.840.10045.2.1" => "ecPublicKey",
            "1.2.840.10045.3.1.1" => "prime192v1",
            "1.2.840.10045.3.1.7" => "prime256v1",
            "1.3.132.0.10" => "secp256k1",
            "1.3.132.0.33" => "secp224r1",
            "1.3.132.0.34" => "secp384r1",
            "1.3.132.0.35" => "secp521r1",
            "1.3.36.3.3.2.8.1.1.7" => "brainpoolP256r1",
            "1.3.36.3.3.2.8.1.1.11" => "brainpoolP384r1",
            "1.3.36.3.3.2.8.1.1.13" => "brainpoolP512r1",

            // Netscape
            "2.16.840.1.113730.1.1" => "netscape-cert-type",
            "2.16.840.1.113730.1.13" => "netscape-comment",

            _ => return None
        };
        Some(res)
    }
}

impl OidNames for KnownOids {
    fn name(&self, oid: &str) -> Option<&str> {
        Self::lookup(oid)
    }
}


//============ Tests =========================================================
