//! RFC 5054 appendix B test vector, pushed through the public pipeline.

use srp6a::client::SrpClient;
use srp6a::groups::G_1024;
use srp6a::hash::HashAlgorithm;
use srp6a::integer::SrpInteger;
use srp6a::params::SrpParameters;
use srp6a::server::SrpServer;
use srp6a::utils::compute_u;

const I: &str = "alice";
const P: &str = "password123";
const S: &str = "beb25379d1a8581eb5a727673a2441ee";

const A_SECRET: &str = "60975527035cf2ad1989806f0407210bc81edc04e2762a56afd529ddda2d4393";
const B_SECRET: &str = "e487cb59d31ac550471e81f00f6928e01dda08e974a004f49e61f5d105284d20";

const V: &str = concat!(
    "7e273de8696ffc4f4e337d05b4b375beb0dde1569e8fa00a9886d8129bada1f1",
    "822223ca1a605b530e379ba4729fdc59f105b4787e5186f5c671085a1447b52a",
    "48cf1970b4fb6f8400bbf4cebfbb168152e08ab5ea53d15c1aff87b2b9da6e04",
    "e058ad51cc72bfc9033b564e26480d78e955a5e29e7ab245db2be315e2099afb",
);

const A_PUB: &str = concat!(
    "61d5e490f6f1b79547b0704c436f523dd0e560f0c64115bb72557ec44352e890",
    "3211c04692272d8b2d1a5358a2cf1b6e0bfcf99f921530ec8e39356179eae45e",
    "42ba92aeaced825171e1e8b9af6d9c03e1327f44be087ef06530e69f66615261",
    "eef54073ca11cf5858f0edfdfe15efeab349ef5d76988a3672fac47b0769447b",
);

const B_PUB: &str = concat!(
    "bd0c61512c692c0cb6d041fa01bb152d4916a1e77af46ae105393011baf38964",
    "dc46a0670dd125b95a981652236f99d9b681cbf87837ec996c6da04453728610",
    "d0c6ddb58b318885d7d82c7f8deb75ce7bd4fbaa37089e6f9c6059f388838e7a",
    "00030b331eb76840910440b1b27aaeaeeb4012b7d7665238a8e3fb004b117b58",
);

#[test]
#[allow(clippy::many_single_char_names)]
fn rfc5054() {
    let params = SrpParameters::new(&G_1024, HashAlgorithm::Sha1).unwrap();
    let client = SrpClient::new(&params);
    let server = SrpServer::new(&params);

    assert_eq!(
        *params.k(),
        SrpInteger::from_hex("7556aa045aef2cdd07abaf0f665c3e818913186f").unwrap(),
        "bad k value"
    );

    let x = client.derive_private_key(S, I, P).unwrap();
    assert_eq!(x, "94b7555aabe9127cc58ccf4993db6cf84d16c124", "bad x value");

    let v = client.derive_verifier(&x).unwrap();
    assert_eq!(v, V, "bad v value");

    let a_pub = client.compute_public_ephemeral(A_SECRET).unwrap();
    assert_eq!(a_pub, A_PUB, "bad A value");

    let u = compute_u(
        &params,
        &SrpInteger::from_hex(A_PUB).unwrap(),
        &SrpInteger::from_hex(B_PUB).unwrap(),
    )
    .unwrap();
    assert_eq!(
        u,
        SrpInteger::from_hex("ce38b9593487da98554ed47d70a7ae5f462ef019").unwrap(),
        "bad u value"
    );

    let client_session = client.derive_session(A_SECRET, B_PUB, S, I, &x).unwrap();
    assert_eq!(
        client_session.key, "017eefa1cefc5c2e626e21598987f31e0f1b11bb",
        "bad client session key"
    );
    assert_eq!(
        client_session.proof, "3f3bc67169ea71302599cf1b0f5d408b7b65d347",
        "bad client proof"
    );

    let server_session = server
        .derive_session(B_SECRET, A_PUB, S, I, &v, &client_session.proof)
        .unwrap();
    assert_eq!(
        server_session.key, client_session.key,
        "session keys diverged"
    );
    assert_eq!(
        server_session.proof, "9cab3c575a11de37d3ac1421a9f009236a48eb55",
        "bad server proof"
    );

    client
        .verify_session(A_PUB, &client_session, &server_session.proof)
        .unwrap();
}

/// `u` must be computed over `PAD(A) | PAD(B)`; a deliberately
/// minimal-width serialization of the same values hashes differently.
#[test]
fn under_padded_u_differs() {
    let params = SrpParameters::new(&G_1024, HashAlgorithm::Sha1).unwrap();

    let a_pub = SrpInteger::from_hex(A_PUB).unwrap();
    // a short public value would arrive zero-extended on the wire
    let b_short = SrpInteger::from_hex("0f").unwrap();

    let padded = compute_u(&params, &a_pub, &b_short).unwrap();
    let unpadded = params
        .hash()
        .compute(&[
            srp6a::hash::HashInput::Int(&params.pad(&a_pub)),
            srp6a::hash::HashInput::Int(&b_short),
        ])
        .unwrap();
    assert_ne!(padded, unpadded);
}
